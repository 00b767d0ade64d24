use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub remote_database_url: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://sunflower.db?mode=rwc".to_string()),
            remote_database_url: env::var("REMOTE_DATABASE_URL").ok(),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
        }
    }
}
