// server/src/services/mailer.rs

//! Delivery of the rendered notification emails through the Resend API.
//! The dispatcher treats every mailer error as non-fatal, so this layer
//! is free to retry a little and then give up loudly.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use delices_core::notify::EmailMessage;
use delices_core::ports::Mailer;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";
const MAX_ATTEMPTS: u32 = 3;
const INITIAL_BACKOFF: Duration = Duration::from_millis(250);

pub struct ResendMailer {
  http: reqwest::Client,
  api_key: String,
  from: String,
}

impl ResendMailer {
  pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
    ResendMailer {
      http: reqwest::Client::new(),
      api_key: api_key.into(),
      from: from.into(),
    }
  }

  async fn post_once(&self, message: &EmailMessage) -> anyhow::Result<()> {
    let response = self
      .http
      .post(RESEND_ENDPOINT)
      .bearer_auth(&self.api_key)
      .json(&json!({
        "from": self.from,
        "to": [message.to],
        "subject": message.subject,
        "html": message.html,
      }))
      .send()
      .await
      .context("request to the email provider failed")?;

    if !response.status().is_success() {
      let status = response.status();
      let body = response.text().await.unwrap_or_default();
      anyhow::bail!("email provider returned {}: {}", status, body);
    }
    Ok(())
  }
}

#[async_trait]
impl Mailer for ResendMailer {
  async fn send(&self, message: &EmailMessage) -> anyhow::Result<()> {
    let mut backoff = INITIAL_BACKOFF;
    let mut last_error = None;

    for attempt in 1..=MAX_ATTEMPTS {
      match self.post_once(message).await {
        Ok(()) => {
          info!(to = %message.to, subject = %message.subject, attempt, "email accepted");
          return Ok(());
        }
        Err(error) => {
          warn!(
            to = %message.to,
            attempt,
            max_attempts = MAX_ATTEMPTS,
            error = %error,
            "email send attempt failed"
          );
          last_error = Some(error);
          if attempt < MAX_ATTEMPTS {
            tokio::time::sleep(backoff).await;
            backoff *= 2;
          }
        }
      }
    }

    Err(last_error.expect("at least one attempt ran"))
  }
}

/// Stands in when no RESEND_API_KEY is configured: logs the subject and
/// drops the message. Orders and reservations proceed as usual.
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
  async fn send(&self, message: &EmailMessage) -> anyhow::Result<()> {
    warn!(
      to = %message.to,
      subject = %message.subject,
      "mailer disabled, dropping notification email"
    );
    Ok(())
  }
}
