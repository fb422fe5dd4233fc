// core/src/model/reservation.rs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UnknownValue;
use crate::error::CoreError;

/// Reservation lifecycle: every terminal state is reached directly from
/// pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
  Pending,
  Confirmed,
  Cancelled,
  Completed,
}

impl ReservationStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      ReservationStatus::Pending => "pending",
      ReservationStatus::Confirmed => "confirmed",
      ReservationStatus::Cancelled => "cancelled",
      ReservationStatus::Completed => "completed",
    }
  }

  pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
    use ReservationStatus::*;
    if *self == next {
      return true;
    }
    matches!(
      (*self, next),
      (Pending, Confirmed) | (Pending, Cancelled) | (Pending, Completed)
    )
  }

  pub fn ensure_transition(&self, next: ReservationStatus) -> Result<(), CoreError> {
    if self.can_transition_to(next) {
      Ok(())
    } else {
      Err(CoreError::IllegalTransition {
        from: self.as_str(),
        to: next.as_str(),
      })
    }
  }
}

impl std::str::FromStr for ReservationStatus {
  type Err = UnknownValue;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(ReservationStatus::Pending),
      "confirmed" => Ok(ReservationStatus::Confirmed),
      "cancelled" => Ok(ReservationStatus::Cancelled),
      "completed" => Ok(ReservationStatus::Completed),
      other => Err(UnknownValue {
        kind: "reservation status",
        value: other.to_string(),
      }),
    }
  }
}

impl std::fmt::Display for ReservationStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Table booking. Independent from orders; the two share only the
/// notification pattern.
#[derive(Debug, Clone, Serialize)]
pub struct Reservation {
  pub id: Uuid,
  pub reservation_number: String,
  pub customer_name: String,
  pub customer_email: String,
  pub customer_phone: Option<String>,
  pub reservation_date: NaiveDate,
  pub reservation_time: NaiveTime,
  pub party_size: i32,
  pub notes: Option<String>,
  pub status: ReservationStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReservation {
  pub customer_name: String,
  pub customer_email: String,
  pub customer_phone: Option<String>,
  pub reservation_date: NaiveDate,
  pub reservation_time: NaiveTime,
  pub party_size: i32,
  pub notes: Option<String>,
}
