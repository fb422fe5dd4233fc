// core/src/model/mod.rs

//! Record shapes shared across the ordering core: catalog products,
//! cart line items, orders and reservations, plus their closed status
//! unions.

pub mod order;
pub mod product;
pub mod reservation;

pub use order::{NewOrder, Order, OrderItem, OrderStatus, OrderType, PaymentMethod};
pub use product::Product;
pub use reservation::{NewReservation, Reservation, ReservationStatus};

/// Raised when a TEXT column or wire value does not match any variant of
/// one of the closed unions.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownValue {
  pub kind: &'static str,
  pub value: String,
}
