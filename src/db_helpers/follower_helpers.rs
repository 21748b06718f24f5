use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

use crate::{
    errors::Result,
    models::{Question, QuestionFollower, User},
};

use super::non_empty;

impl QuestionFollower {
    /// Records that `user_id` follows `question_id`. Duplicate follows are
    /// not rejected.
    pub async fn follow(
        pool: &SqlitePool,
        question_id: i64,
        user_id: i64,
    ) -> Result<QuestionFollower> {
        let id = sqlx::query(
            r#"
            INSERT INTO question_followers (question_id, user_id)
            VALUES (?, ?)
            "#,
        )
        .bind(question_id)
        .bind(user_id)
        .execute(pool)
        .await?
        .last_insert_rowid();
        debug!(question_id, user_id, "inserted question follower");
        Ok(QuestionFollower {
            id,
            question_id,
            user_id,
        })
    }

    pub async fn followers_for_question_id(
        pool: &SqlitePool,
        question_id: i64,
    ) -> Result<Option<Vec<User>>> {
        let result = sqlx::query_as::<Sqlite, User>(
            r#"
            SELECT u.*
            FROM question_followers AS qf JOIN users AS u
            ON (qf.user_id = u.user_id)
            WHERE qf.question_id = ?
            "#,
        )
        .bind(question_id)
        .fetch_all(pool)
        .await?;
        Ok(non_empty(result))
    }

    pub async fn followed_questions_for_user_id(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Option<Vec<Question>>> {
        let result = sqlx::query_as::<Sqlite, Question>(
            r#"
            SELECT q.*
            FROM question_followers AS qf JOIN questions AS q
            ON qf.question_id = q.question_id
            WHERE qf.user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(non_empty(result))
    }

    /// Top `n` questions by follower count, descending. Questions with equal
    /// counts come back in whatever order SQLite groups them.
    pub async fn most_followed_questions(
        pool: &SqlitePool,
        n: u32,
    ) -> Result<Option<Vec<Question>>> {
        let result = sqlx::query_as::<Sqlite, Question>(
            r#"
            SELECT q.*
            FROM question_followers AS qf JOIN questions AS q
            ON qf.question_id = q.question_id
            GROUP BY qf.question_id
            ORDER BY COUNT(qf.user_id) DESC
            LIMIT ?
            "#,
        )
        .bind(n)
        .fetch_all(pool)
        .await?;
        Ok(non_empty(result))
    }
}
