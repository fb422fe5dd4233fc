// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::checkout::ValidationIssue;

#[derive(Debug, Error)]
pub enum CoreError {
  /// A checkout or reservation rule failed. Recovered locally; the
  /// message is shown to the customer and never reaches the network.
  #[error("{0}")]
  Validation(#[from] ValidationIssue),

  /// The persistence collaborator rejected or failed the write. Fatal to
  /// the current submission attempt; the cart is left untouched.
  #[error("Order persistence failed. Source: {source}")]
  Persistence {
    #[source]
    source: AnyhowError,
  },

  /// The notification collaborator failed. Callers must treat this as
  /// non-fatal; it is logged and never surfaced to the customer.
  #[error("Notification dispatch failed. Source: {source}")]
  Notification {
    #[source]
    source: AnyhowError,
  },

  /// A submission for this cart is already in flight; re-entrant submits
  /// are rejected rather than queued.
  #[error("A submission for this cart is already in progress")]
  SubmissionInFlight,

  /// The order draft's totals disagree with its line items.
  #[error("Order totals do not match the line items (expected {expected}, subtotal {subtotal}, total {total})")]
  TotalMismatch {
    expected: i64,
    subtotal: i64,
    total: i64,
  },

  /// A status update outside the lifecycle diagrams.
  #[error("Illegal status transition: {from} -> {to}")]
  IllegalTransition {
    from: &'static str,
    to: &'static str,
  },
}

pub type CoreResult<T, E = CoreError> = std::result::Result<T, E>;
