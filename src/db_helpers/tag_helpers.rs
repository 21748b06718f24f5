use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

use crate::{
    errors::Result,
    models::{PopularTag, QuestionTag, Tag},
};

use super::non_empty;

// The bare title/body/author_id columns beside MAX() are taken from the row
// holding the maximum; when two questions tie, SQLite picks one of them.
const MOST_POPULAR_QUERY: &str = r#"
        SELECT t.tag AS tag,
          z.title AS title, z.body AS body, z.author_id AS author_id, z.likes AS likes
        FROM tags AS t JOIN (
          SELECT
            qt.tag_id AS tag_id,
            y.title AS title,
            y.body AS body,
            y.author_id AS author_id,
            MAX(y.likes) AS likes
          FROM question_tags AS qt JOIN
            (SELECT q.*, COUNT(ql.user_id) AS likes
            FROM question_likes AS ql JOIN questions AS q
            ON ql.question_id = q.question_id
            GROUP BY ql.question_id
            ORDER BY COUNT(ql.user_id) DESC) AS y
          ON qt.question_id = y.question_id
          GROUP BY qt.tag_id) AS z
        ON t.tag_id = z.tag_id
"#;

impl Tag {
    pub async fn create(pool: &SqlitePool, tag: &str) -> Result<Tag> {
        let tag_id = sqlx::query(
            r#"
            INSERT INTO tags (tag) VALUES (?)
            "#,
        )
        .bind(tag)
        .execute(pool)
        .await?
        .last_insert_rowid();
        debug!(tag_id, tag, "inserted tag");
        Ok(Tag {
            tag_id,
            tag: tag.to_owned(),
        })
    }

    pub async fn tag_question(
        pool: &SqlitePool,
        tag_id: i64,
        question_id: i64,
    ) -> Result<QuestionTag> {
        sqlx::query(
            r#"
            INSERT INTO question_tags (tag_id, question_id) VALUES (?, ?)
            "#,
        )
        .bind(tag_id)
        .bind(question_id)
        .execute(pool)
        .await?;
        Ok(QuestionTag {
            tag_id,
            question_id,
        })
    }

    pub async fn find_by_question_id(
        pool: &SqlitePool,
        question_id: i64,
    ) -> Result<Option<Vec<Tag>>> {
        let result = sqlx::query_as::<Sqlite, Tag>(
            r#"
            SELECT t.*
            FROM tags AS t JOIN question_tags AS qt
            ON t.tag_id = qt.tag_id
            WHERE qt.question_id = ?
            "#,
        )
        .bind(question_id)
        .fetch_all(pool)
        .await?;
        Ok(non_empty(result))
    }

    /// For every tag with at least one liked question, that tag's most liked
    /// question. Tags whose questions have no likes are left out.
    pub async fn most_popular(pool: &SqlitePool) -> Result<Vec<PopularTag>> {
        let result = sqlx::query_as::<Sqlite, PopularTag>(MOST_POPULAR_QUERY)
            .fetch_all(pool)
            .await?;
        Ok(result)
    }
}
