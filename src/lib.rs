//! Record mappers for a questions-and-answers database stored in SQLite.
//!
//! Every finder takes the pool owned by a [`QuestionsDatabase`] and runs one
//! hand-written query. A query that matches nothing is reported as `None`,
//! never as an error and never as an empty list.
//!
//! ```rust,ignore
//! let db = QuestionsDatabase::open(&DatabaseConfig::from_env()).await?;
//! let mut user = User::new("Ada", "Lovelace");
//! user.save(db.pool()).await?;
//! let questions = user.authored_questions(db.pool()).await?;
//! ```

mod config;
mod database;
mod db_helpers;
mod errors;
mod models;

pub use config::{DatabaseConfig, DEFAULT_DATABASE_URL};
pub use database::QuestionsDatabase;
pub use errors::{DatabaseError, Result};
pub use models::*;
