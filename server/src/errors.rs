// server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use delices_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Session Error: {0}")]
  Session(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Conflict: {0}")]
  Conflict(String),

  /// Retryable failure of the persistence collaborator; the cart is
  /// preserved and the customer is asked to try again.
  #[error("Service Unavailable: {0}")]
  Unavailable(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<CoreError> for ApiError {
  fn from(err: CoreError) -> Self {
    match err {
      // The issue's Display is the exact customer-facing message.
      CoreError::Validation(issue) => ApiError::Validation(issue.to_string()),
      CoreError::SubmissionInFlight => {
        ApiError::Conflict("Une commande est déjà en cours d'envoi".to_string())
      }
      CoreError::Persistence { source } => {
        tracing::error!(error = ?source, "order persistence failed");
        ApiError::Unavailable("Impossible de créer la commande. Veuillez réessayer.".to_string())
      }
      err @ CoreError::TotalMismatch { .. } => ApiError::Validation(err.to_string()),
      CoreError::IllegalTransition { from, to } => {
        ApiError::Conflict(format!("Transition de statut interdite: {} -> {}", from, to))
      }
      // Never reaches a handler: the flows swallow notifier errors.
      CoreError::Notification { source } => ApiError::Internal(source.to_string()),
    }
  }
}

// Handlers using `?` on anyhow-returning collaborators land here.
impl From<anyhow::Error> for ApiError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<sqlx::Error>() {
      return ApiError::Sqlx(err.downcast::<sqlx::Error>().unwrap());
    }
    ApiError::Internal(err.to_string())
  }
}

impl ResponseError for ApiError {
  fn error_response(&self) -> HttpResponse {
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      ApiError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      ApiError::Session(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      ApiError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      ApiError::Conflict(m) => HttpResponse::Conflict().json(json!({"error": m})),
      ApiError::Unavailable(m) => HttpResponse::ServiceUnavailable().json(json!({"error": m})),
      ApiError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      ApiError::Sqlx(_) => {
        HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"}))
      }
      ApiError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = ApiError> = std::result::Result<T, E>;
