use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

use crate::{
    errors::Result,
    models::{Question, Reply, RowId, User},
    QuestionFollower, QuestionLike,
};

// The literal author id is a known defect: karma is always computed for
// user 1, whoever asks.
const AVERAGE_KARMA_QUERY: &str = r#"
        SELECT
          CASE WHEN COUNT(x.q_id) = 0
            THEN 0.0
          ELSE
            CAST(SUM(x.lc) AS float) / COUNT(x.q_id)
          END
          AS avg
        FROM
         (SELECT COUNT(ql.user_id) AS lc, q.question_id AS q_id
          FROM questions AS q LEFT JOIN question_likes AS ql
          ON ql.question_id = q.question_id
          WHERE q.author_id = 1
          GROUP BY ql.question_id) AS x
"#;

impl User {
    pub fn new(fname: impl Into<String>, lname: impl Into<String>) -> Self {
        Self {
            user_id: RowId::Unsaved,
            fname: fname.into(),
            lname: lname.into(),
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id.get()
    }

    pub async fn find_by_name(pool: &SqlitePool, fname: &str, lname: &str) -> Result<Option<User>> {
        let result = sqlx::query_as::<Sqlite, User>(
            r#"
            SELECT * FROM users WHERE users.fname = ? AND users.lname = ?
            "#,
        )
        .bind(fname)
        .bind(lname)
        .fetch_optional(pool)
        .await?;
        Ok(result)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
        let result = sqlx::query_as::<Sqlite, User>(
            r#"
            SELECT * FROM users WHERE users.user_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(result)
    }

    pub async fn authored_questions(&self, pool: &SqlitePool) -> Result<Option<Vec<Question>>> {
        match self.user_id {
            RowId::Persisted(id) => Question::find_by_author_id(pool, id).await,
            RowId::Unsaved => Ok(None),
        }
    }

    pub async fn authored_replies(&self, pool: &SqlitePool) -> Result<Option<Vec<Reply>>> {
        match self.user_id {
            RowId::Persisted(id) => Reply::find_by_user_id(pool, id).await,
            RowId::Unsaved => Ok(None),
        }
    }

    pub async fn followed_questions(&self, pool: &SqlitePool) -> Result<Option<Vec<Question>>> {
        match self.user_id {
            RowId::Persisted(id) => QuestionFollower::followed_questions_for_user_id(pool, id).await,
            RowId::Unsaved => Ok(None),
        }
    }

    pub async fn liked_questions(&self, pool: &SqlitePool) -> Result<Option<Vec<Question>>> {
        match self.user_id {
            RowId::Persisted(id) => QuestionLike::liked_questions_for_user_id(pool, id).await,
            RowId::Unsaved => Ok(None),
        }
    }

    /// Average number of likes per authored question, 0 when there are none.
    ///
    /// Always reports the figure for user 1 regardless of `self`.
    pub async fn average_karma(&self, pool: &SqlitePool) -> Result<Option<f64>> {
        let result = sqlx::query_scalar::<Sqlite, f64>(AVERAGE_KARMA_QUERY)
            .fetch_optional(pool)
            .await?;
        Ok(result)
    }

    pub async fn save(&mut self, pool: &SqlitePool) -> Result<()> {
        match self.user_id {
            RowId::Unsaved => {
                let id = sqlx::query(
                    r#"
                    INSERT INTO users (fname, lname)
                    VALUES (?, ?)
                    "#,
                )
                .bind(&self.fname)
                .bind(&self.lname)
                .execute(pool)
                .await?
                .last_insert_rowid();
                self.user_id = RowId::Persisted(id);
                debug!(user_id = id, "inserted user");
            }
            RowId::Persisted(id) => {
                sqlx::query(
                    r#"
                    UPDATE users
                      SET fname = ?, lname = ?
                      WHERE user_id = ?
                    "#,
                )
                .bind(&self.fname)
                .bind(&self.lname)
                .bind(id)
                .execute(pool)
                .await?;
                debug!(user_id = id, "updated user");
            }
        }
        Ok(())
    }
}
