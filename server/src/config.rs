// server/src/config.rs

use crate::errors::{ApiError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub app_base_url: String,

  /// Fixed recipient of the kitchen/reservation emails.
  pub kitchen_email: String,
  pub mail_from: String,
  /// Without a key the server runs with a disabled mailer that only
  /// logs what it would have sent.
  pub resend_api_key: Option<String>,

  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name)
        .map_err(|e| ApiError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| ApiError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;
    let app_base_url =
      get_env("APP_BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", server_host, server_port));

    let kitchen_email = get_env("KITCHEN_EMAIL").unwrap_or_else(|_| "cuisine@delices.example".to_string());
    let mail_from =
      get_env("MAIL_FROM").unwrap_or_else(|_| "Délices <commandes@delices.example>".to_string());
    let resend_api_key = env::var("RESEND_API_KEY").ok().filter(|key| !key.is_empty());

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| ApiError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      app_base_url,
      kitchen_email,
      mail_from,
      resend_api_key,
      seed_db,
    })
  }
}
