use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

use crate::{
    errors::Result,
    models::{Question, Reply, RowId, User},
};

use super::non_empty;

impl Reply {
    pub fn new(
        reply: impl Into<String>,
        author_id: i64,
        question_id: i64,
        parent_id: Option<i64>,
    ) -> Self {
        Self {
            id: RowId::Unsaved,
            reply: reply.into(),
            author_id,
            question_id,
            parent_id,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id.get()
    }

    pub fn author_id(&self) -> i64 {
        self.author_id
    }

    pub fn question_id(&self) -> i64 {
        self.question_id
    }

    pub fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }

    pub async fn find_by_user_id(pool: &SqlitePool, user_id: i64) -> Result<Option<Vec<Reply>>> {
        let result = sqlx::query_as::<Sqlite, Reply>(
            r#"
            SELECT * FROM replies WHERE replies.author_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(non_empty(result))
    }

    pub async fn find_by_question_id(
        pool: &SqlitePool,
        question_id: i64,
    ) -> Result<Option<Vec<Reply>>> {
        let result = sqlx::query_as::<Sqlite, Reply>(
            r#"
            SELECT * FROM replies WHERE replies.question_id = ?
            "#,
        )
        .bind(question_id)
        .fetch_all(pool)
        .await?;
        Ok(non_empty(result))
    }

    /// Resolved through the author's replies, so it is absent until at least
    /// one reply by this author is stored.
    pub async fn author(&self, pool: &SqlitePool) -> Result<Option<User>> {
        let author_id = sqlx::query_scalar::<Sqlite, i64>(
            r#"
            SELECT author_id FROM replies WHERE replies.author_id = ?
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

    pub async fn question(&self, pool: &SqlitePool) -> Result<Option<Question>> {
        let result = sqlx::query_as::<Sqlite, Question>(
            r#"
            SELECT * FROM questions WHERE questions.question_id = ?
            "#,
        )
        .bind(self.question_id)
        .fetch_optional(pool)
        .await?;
        Ok(result)
    }

    pub async fn parent_reply(&self, pool: &SqlitePool) -> Result<Option<Reply>> {
        let parent_id = match self.parent_id {
            Some(parent_id) => parent_id,
            None => return Ok(None),
        };
        let result = sqlx::query_as::<Sqlite, Reply>(
            r#"
            SELECT * FROM replies WHERE replies.id = ?
            "#,
        )
        .bind(parent_id)
        .fetch_optional(pool)
        .await?;
        Ok(result)
    }

    /// Direct children only; a leaf reply yields `None`.
    pub async fn child_replies(&self, pool: &SqlitePool) -> Result<Option<Vec<Reply>>> {
        let id = match self.id {
            RowId::Persisted(id) => id,
            RowId::Unsaved => return Ok(None),
        };
        let result = sqlx::query_as::<Sqlite, Reply>(
            r#"
            SELECT * FROM replies WHERE replies.parent_id = ?
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(non_empty(result))
    }

    pub async fn save(&mut self, pool: &SqlitePool) -> Result<()> {
        match self.id {
            RowId::Unsaved => {
                let id = sqlx::query(
                    r#"
                    INSERT INTO replies (reply, author_id, question_id, parent_id)
                    VALUES (?, ?, ?, ?)
                    "#,
                )
                .bind(&self.reply)
                .bind(self.author_id)
                .bind(self.question_id)
                .bind(self.parent_id)
                .execute(pool)
                .await?
                .last_insert_rowid();
                self.id = RowId::Persisted(id);
                debug!(reply_id = id, question_id = self.question_id, "inserted reply");
            }
            RowId::Persisted(id) => {
                sqlx::query(
                    r#"
                    UPDATE replies
                      SET reply = ?
                      WHERE id = ?
                    "#,
                )
                .bind(&self.reply)
                .bind(id)
                .execute(pool)
                .await?;
                debug!(reply_id = id, "updated reply");
            }
        }
        Ok(())
    }
}
