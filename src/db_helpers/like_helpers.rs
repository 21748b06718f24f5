use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

use crate::{
    errors::Result,
    models::{Question, QuestionLike, User},
};

use super::non_empty;

impl QuestionLike {
    pub async fn like(pool: &SqlitePool, question_id: i64, user_id: i64) -> Result<QuestionLike> {
        sqlx::query(
            r#"
            INSERT INTO question_likes (question_id, user_id)
            VALUES (?, ?)
            "#,
        )
        .bind(question_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        debug!(question_id, user_id, "inserted question like");
        Ok(QuestionLike {
            question_id,
            user_id,
        })
    }

    pub async fn likers_for_question_id(
        pool: &SqlitePool,
        question_id: i64,
    ) -> Result<Option<Vec<User>>> {
        let result = sqlx::query_as::<Sqlite, User>(
            r#"
            SELECT u.*
            FROM users AS u JOIN (
              SELECT ql.*
              FROM question_likes AS ql JOIN questions AS q
              ON ql.question_id = q.question_id
              WHERE ql.question_id = ?
            ) AS x
            ON u.user_id = x.user_id
            "#,
        )
        .bind(question_id)
        .fetch_all(pool)
        .await?;
        Ok(non_empty(result))
    }

    /// The GROUP BY drops questions without likes, so zero likes is `None`.
    pub async fn num_likes_for_question_id(
        pool: &SqlitePool,
        question_id: i64,
    ) -> Result<Option<i64>> {
        let result = sqlx::query_scalar::<Sqlite, i64>(
            r#"
            SELECT COUNT(user_id) AS num
            FROM question_likes AS ql
            WHERE ql.question_id = ?
            GROUP BY ql.question_id
            "#,
        )
        .bind(question_id)
        .fetch_optional(pool)
        .await?;
        Ok(result)
    }

    pub async fn liked_questions_for_user_id(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Option<Vec<Question>>> {
        let result = sqlx::query_as::<Sqlite, Question>(
            r#"
            SELECT q.*
            FROM questions AS q JOIN (
              SELECT ql.*
              FROM question_likes AS ql JOIN users AS u
              ON ql.user_id = u.user_id
              WHERE ql.user_id = ?
            ) AS x
            ON q.question_id = x.question_id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(non_empty(result))
    }

    /// Top `n` questions by like count, descending. Ties are in no
    /// particular order.
    pub async fn most_liked_questions(pool: &SqlitePool, n: u32) -> Result<Option<Vec<Question>>> {
        let result = sqlx::query_as::<Sqlite, Question>(
            r#"
            SELECT q.*
            FROM question_likes AS ql JOIN questions AS q
            ON ql.question_id = q.question_id
            GROUP BY ql.question_id
            ORDER BY COUNT(ql.user_id) DESC
            LIMIT ?
            "#,
        )
        .bind(n)
        .fetch_all(pool)
        .await?;
        Ok(non_empty(result))
    }
}
