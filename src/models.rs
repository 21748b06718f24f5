use serde::Serialize;
use sqlx::{sqlite::SqliteRow, FromRow, Row};

/// Primary key of an entity. `save` inserts while this is `Unsaved` and
/// updates once it is `Persisted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "Option<i64>")]
pub enum RowId {
    #[default]
    Unsaved,
    Persisted(i64),
}

impl RowId {
    pub fn get(self) -> Option<i64> {
        match self {
            RowId::Unsaved => None,
            RowId::Persisted(id) => Some(id),
        }
    }

    pub fn is_persisted(self) -> bool {
        matches!(self, RowId::Persisted(_))
    }
}

impl From<RowId> for Option<i64> {
    fn from(value: RowId) -> Self {
        value.get()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub(crate) user_id: RowId,
    pub fname: String,
    pub lname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub(crate) question_id: RowId,
    pub title: String,
    pub body: String,
    pub(crate) author_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub(crate) id: RowId,
    pub reply: String,
    pub(crate) author_id: i64,
    pub(crate) question_id: i64,
    pub(crate) parent_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct QuestionFollower {
    pub id: i64,
    pub question_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct QuestionLike {
    pub question_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Tag {
    pub tag_id: i64,
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct QuestionTag {
    pub tag_id: i64,
    pub question_id: i64,
}

/// One row of `Tag::most_popular`: a tag and its most liked question.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct PopularTag {
    pub tag: String,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub likes: i64,
}

impl<'r> FromRow<'r, SqliteRow> for User {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            user_id: RowId::Persisted(row.try_get("user_id")?),
            fname: row.try_get("fname")?,
            lname: row.try_get("lname")?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Question {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            question_id: RowId::Persisted(row.try_get("question_id")?),
            title: row.try_get("title")?,
            body: row.try_get("body")?,
            author_id: row.try_get("author_id")?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Reply {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: RowId::Persisted(row.try_get("id")?),
            reply: row.try_get("reply")?,
            author_id: row.try_get("author_id")?,
            question_id: row.try_get("question_id")?,
            parent_id: row.try_get("parent_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsaved_ids_are_absent() {
        assert_eq!(RowId::default(), RowId::Unsaved);
        assert_eq!(RowId::Unsaved.get(), None);
        assert!(!RowId::Unsaved.is_persisted());
        assert_eq!(RowId::Persisted(7).get(), Some(7));
        assert!(RowId::Persisted(7).is_persisted());
    }

    #[test]
    fn ids_serialize_as_nullable_integers() {
        let user = User {
            user_id: RowId::Unsaved,
            fname: "Ada".to_owned(),
            lname: "Lovelace".to_owned(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json["user_id"].is_null());

        let question = Question {
            question_id: RowId::Persisted(3),
            title: "t".to_owned(),
            body: "b".to_owned(),
            author_id: 1,
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["question_id"], 3);
    }
}
