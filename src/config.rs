use std::env;

use anyhow::Context;

/// Runtime configuration, read once at startup: `DATABASE_URL` (required),
/// `APP_HOST` (default 127.0.0.1) and `APP_PORT` (default 3000).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_port(env::var("APP_PORT").ok())?;
        Ok(Self {
            port,
            database_url,
            host,
        })
    }
}

fn parse_port(raw: Option<String>) -> anyhow::Result<u16> {
    match raw {
        Some(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("APP_PORT is not a valid port: {raw}")),
        None => Ok(3000),
    }
}
