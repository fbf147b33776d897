use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub sendgrid_api_key: String,
    pub mail_from_email: String,
    pub mail_from_name: String,
    pub upload_dir: String,
    pub admin_emails: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET")
                .context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER")
                .unwrap_or_else(|_| "franchisebridge".to_string()),
            sendgrid_api_key: env::var("SENDGRID_API_KEY")
                .context("SENDGRID_API_KEY must be set")?,
            mail_from_email: env::var("MAIL_FROM_EMAIL")
                .context("MAIL_FROM_EMAIL must be set")?,
            mail_from_name: env::var("MAIL_FROM_NAME")
                .unwrap_or_else(|_| "FranchiseBridge".to_string()),
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "./uploads".to_string()),
            admin_emails: env::var("ADMIN_EMAILS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}
