// core/src/lib.rs

//! Ordering and reservation domain for the Délices restaurant.
//!
//! This crate holds the pieces of the ordering workflow that are pure
//! business logic:
//!  - the session cart (priced snapshots, one line per product),
//!  - the synchronous checkout validator (fail-fast, one message at a
//!    time),
//!  - the order and reservation submission flows (persist, then notify
//!    best-effort, then clear),
//!  - the notification dispatcher that renders the kitchen's French
//!    emails.
//!
//! Everything with I/O behind it — the catalog, the order and
//! reservation stores, the mail provider — is reached through the traits
//! in [`ports`], so the flows run the same against PostgreSQL or against
//! the in-memory doubles used in tests.

pub mod cart;
pub mod checkout;
pub mod error;
pub mod flow;
pub mod model;
pub mod notify;
pub mod ports;

// --- Re-exports for the public API ---

pub use crate::cart::{Cart, SharedCart, SubmissionToken};
pub use crate::checkout::{validate, CustomerDetails, ValidationIssue};
pub use crate::error::{CoreError, CoreResult};
pub use crate::flow::{OrderFlow, ReservationDetails, ReservationFlow};
pub use crate::model::{
  NewOrder, NewReservation, Order, OrderItem, OrderStatus, OrderType, PaymentMethod, Product,
  Reservation, ReservationStatus,
};
pub use crate::notify::{Dispatcher, EmailMessage, NotificationKind};
pub use crate::ports::{Mailer, Notifier, OrderStore, ProductCatalog, ReservationStore};
