pub const DEFAULT_DATABASE_URL: &str = "sqlite://user_questions.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Reads `DATABASE_URL`, falling back to `user_questions.db` in the
    /// working directory.
    pub fn from_env() -> Self {
        Self::from_var(std::env::var("DATABASE_URL").ok())
    }

    fn from_var(url: Option<String>) -> Self {
        match url {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_DATABASE_URL),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}
