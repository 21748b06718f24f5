#![allow(dead_code)]

use questions_db::{Question, QuestionsDatabase, User};

pub async fn fresh_db() -> QuestionsDatabase {
    let db = QuestionsDatabase::memory().await.unwrap();
    db.migrate().await.unwrap();
    db
}

pub async fn saved_user(db: &QuestionsDatabase, fname: &str, lname: &str) -> User {
    let mut user = User::new(fname, lname);
    user.save(db.pool()).await.unwrap();
    user
}

pub async fn saved_question(db: &QuestionsDatabase, title: &str, author: &User) -> Question {
    let mut question = Question::new(title, format!("{title}?"), author.user_id().unwrap());
    question.save(db.pool()).await.unwrap();
    question
}

pub async fn count_rows(db: &QuestionsDatabase, table: &str) -> i64 {
    sqlx::query_scalar::<sqlx::Sqlite, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(db.pool())
        .await
        .unwrap()
}

pub fn titles(questions: &[Question]) -> Vec<&str> {
    questions.iter().map(|q| q.title.as_str()).collect()
}
