// core/src/flow.rs

//! Orchestration from validated input to durable record plus best-effort
//! kitchen notification. Persistence is the only fatal step; the cart is
//! cleared after it succeeds, never before, and never when it fails.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::cart::SharedCart;
use crate::checkout::{self, CustomerDetails, ValidationIssue};
use crate::error::{CoreError, CoreResult};
use crate::model::{NewReservation, Order, Reservation};
use crate::ports::{Notifier, OrderStore, ReservationStore};

pub struct OrderFlow {
  store: Arc<dyn OrderStore>,
  notifier: Arc<dyn Notifier>,
}

impl OrderFlow {
  pub fn new(store: Arc<dyn OrderStore>, notifier: Arc<dyn Notifier>) -> Self {
    OrderFlow { store, notifier }
  }

  /// Runs one checkout submission:
  ///
  /// 1. claim the cart's submission token (re-entrant submits are
  ///    rejected, not queued),
  /// 2. validate and snapshot the cart into an order draft,
  /// 3. persist — fatal on failure, cart untouched,
  /// 4. notify the kitchen — failure is logged and swallowed,
  /// 5. clear the cart and hand back the stored order.
  #[instrument(name = "flow::submit_order", skip(self, cart, details), fields(order_type = %details.order_type))]
  pub async fn submit(&self, cart: &SharedCart, details: &CustomerDetails) -> CoreResult<Order> {
    let _token = cart.begin_submission().ok_or(CoreError::SubmissionInFlight)?;

    // Guards are blocking; build the draft in a scope so none survives
    // into the awaits below.
    let draft = {
      let guard = cart.read();
      checkout::validate(details, &guard)?;
      checkout::build_order(details, &guard)
    };
    draft.verify_totals()?;

    let order = self
      .store
      .create_order(draft)
      .await
      .map_err(|source| CoreError::Persistence { source })?;
    info!(order_number = %order.order_number, total = order.total, "order persisted");

    if let Err(error) = self.notifier.order_placed(&order).await {
      warn!(
        order_number = %order.order_number,
        error = %error,
        "kitchen notification failed; the order stands"
      );
    }

    cart.write().clear();
    Ok(order)
  }
}

/// Customer-supplied reservation fields, pre-trim.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationDetails {
  pub customer_name: String,
  pub customer_email: String,
  #[serde(default)]
  pub customer_phone: Option<String>,
  pub reservation_date: NaiveDate,
  pub reservation_time: NaiveTime,
  pub party_size: i32,
  #[serde(default)]
  pub notes: Option<String>,
}

pub struct ReservationFlow {
  store: Arc<dyn ReservationStore>,
  notifier: Arc<dyn Notifier>,
}

impl ReservationFlow {
  pub fn new(store: Arc<dyn ReservationStore>, notifier: Arc<dyn Notifier>) -> Self {
    ReservationFlow { store, notifier }
  }

  /// Persist-then-notify, with the same failure semantics as orders:
  /// only the persistence step can fail the booking.
  #[instrument(name = "flow::book_reservation", skip(self, details), fields(party_size = details.party_size))]
  pub async fn book(&self, details: &ReservationDetails) -> CoreResult<Reservation> {
    let draft = build_reservation(details)?;

    let reservation = self
      .store
      .create_reservation(draft)
      .await
      .map_err(|source| CoreError::Persistence { source })?;
    info!(
      reservation_number = %reservation.reservation_number,
      "reservation persisted"
    );

    if let Err(error) = self.notifier.reservation_booked(&reservation).await {
      warn!(
        reservation_number = %reservation.reservation_number,
        error = %error,
        "reservation notification failed; the booking stands"
      );
    }

    Ok(reservation)
  }
}

fn build_reservation(details: &ReservationDetails) -> CoreResult<NewReservation> {
  if details.customer_name.trim().is_empty() {
    return Err(ValidationIssue::NameRequired.into());
  }
  if details.customer_email.trim().is_empty() {
    return Err(ValidationIssue::EmailRequired.into());
  }
  if details.party_size < 1 {
    return Err(ValidationIssue::PartySizeTooSmall.into());
  }

  let customer_phone = details
    .customer_phone
    .as_deref()
    .map(str::trim)
    .filter(|phone| !phone.is_empty())
    .map(str::to_string);
  let notes = details
    .notes
    .as_deref()
    .map(str::trim)
    .filter(|notes| !notes.is_empty())
    .map(str::to_string);

  Ok(NewReservation {
    customer_name: details.customer_name.trim().to_string(),
    customer_email: details.customer_email.trim().to_string(),
    customer_phone,
    reservation_date: details.reservation_date,
    reservation_time: details.reservation_time,
    party_size: details.party_size,
    notes,
  })
}
