use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

use crate::{
    errors::Result,
    models::{Question, Reply, RowId, User},
    QuestionFollower, QuestionLike,
};

use super::non_empty;

impl Question {
    pub fn new(title: impl Into<String>, body: impl Into<String>, author_id: i64) -> Self {
        Self {
            question_id: RowId::Unsaved,
            title: title.into(),
            body: body.into(),
            author_id,
        }
    }

    pub fn question_id(&self) -> Option<i64> {
        self.question_id.get()
    }

    pub fn author_id(&self) -> i64 {
        self.author_id
    }

    pub async fn find_by_author_id(
        pool: &SqlitePool,
        author_id: i64,
    ) -> Result<Option<Vec<Question>>> {
        let result = sqlx::query_as::<Sqlite, Question>(
            r#"
            SELECT * FROM questions WHERE questions.author_id = ?
            "#,
        )
        .bind(author_id)
        .fetch_all(pool)
        .await?;
        Ok(non_empty(result))
    }

    pub async fn most_followed(pool: &SqlitePool, n: u32) -> Result<Option<Vec<Question>>> {
        QuestionFollower::most_followed_questions(pool, n).await
    }

    pub async fn most_liked(pool: &SqlitePool, n: u32) -> Result<Option<Vec<Question>>> {
        QuestionLike::most_liked_questions(pool, n).await
    }

    /// Looks the author up through their questions, so an author with no
    /// stored question is reported as absent.
    pub async fn author(&self, pool: &SqlitePool) -> Result<Option<User>> {
        let author_id = sqlx::query_scalar::<Sqlite, i64>(
            r#"
            SELECT author_id FROM questions WHERE questions.author_id = ?
            "#,
        )
        .bind(self.author_id)
        .fetch_optional(pool)
        .await?;
        match author_id {
            Some(id) => User::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    pub async fn replies(&self, pool: &SqlitePool) -> Result<Option<Vec<Reply>>> {
        match self.question_id {
            RowId::Persisted(id) => Reply::find_by_question_id(pool, id).await,
            RowId::Unsaved => Ok(None),
        }
    }

    pub async fn followers(&self, pool: &SqlitePool) -> Result<Option<Vec<User>>> {
        match self.question_id {
            RowId::Persisted(id) => QuestionFollower::followers_for_question_id(pool, id).await,
            RowId::Unsaved => Ok(None),
        }
    }

    pub async fn likers(&self, pool: &SqlitePool) -> Result<Option<Vec<User>>> {
        match self.question_id {
            RowId::Persisted(id) => QuestionLike::likers_for_question_id(pool, id).await,
            RowId::Unsaved => Ok(None),
        }
    }

    /// `None` rather than zero when nobody has liked the question.
    pub async fn num_likes(&self, pool: &SqlitePool) -> Result<Option<i64>> {
        match self.question_id {
            RowId::Persisted(id) => QuestionLike::num_likes_for_question_id(pool, id).await,
            RowId::Unsaved => Ok(None),
        }
    }

    pub async fn save(&mut self, pool: &SqlitePool) -> Result<()> {
        match self.question_id {
            RowId::Unsaved => {
                let id = sqlx::query(
                    r#"
                    INSERT INTO questions (title, body, author_id)
                    VALUES (?, ?, ?)
                    "#,
                )
                .bind(&self.title)
                .bind(&self.body)
                .bind(self.author_id)
                .execute(pool)
                .await?
                .last_insert_rowid();
                self.question_id = RowId::Persisted(id);
                debug!(question_id = id, author_id = self.author_id, "inserted question");
            }
            RowId::Persisted(id) => {
                sqlx::query(
                    r#"
                    UPDATE questions
                      SET title = ?, body = ?
                      WHERE question_id = ?
                    "#,
                )
                .bind(&self.title)
                .bind(&self.body)
                .bind(id)
                .execute(pool)
                .await?;
                debug!(question_id = id, "updated question");
            }
        }
        Ok(())
    }
}
