// core/src/ports.rs

//! Contracts toward the external collaborators. Implementations live
//! outside this crate (PostgreSQL repositories, the Resend client) or in
//! the tests (in-memory doubles); the flows only see these traits.

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{
  NewOrder, NewReservation, Order, OrderStatus, Product, Reservation, ReservationStatus,
};
use crate::notify::EmailMessage;

/// Read access to the menu, ordered by category then name.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
  async fn list_products(&self) -> anyhow::Result<Vec<Product>>;
  async fn find_product(&self, id: Uuid) -> anyhow::Result<Option<Product>>;
}

/// Durable order records. `create_order` must fail loudly on any
/// constraint violation and returns the stored order including its
/// server-assigned order number.
#[async_trait]
pub trait OrderStore: Send + Sync {
  async fn create_order(&self, draft: NewOrder) -> anyhow::Result<Order>;
  async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Order>>;
  async fn find_by_number(&self, order_number: &str) -> anyhow::Result<Option<Order>>;
  /// Newest first.
  async fn list_orders(&self) -> anyhow::Result<Vec<Order>>;
  async fn update_status(&self, id: Uuid, status: OrderStatus) -> anyhow::Result<Order>;
}

/// Durable reservation records, numbered like orders.
#[async_trait]
pub trait ReservationStore: Send + Sync {
  async fn create_reservation(&self, draft: NewReservation) -> anyhow::Result<Reservation>;
  async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Reservation>>;
  /// Ascending by reservation date.
  async fn list_reservations(&self) -> anyhow::Result<Vec<Reservation>>;
  async fn update_status(&self, id: Uuid, status: ReservationStatus) -> anyhow::Result<Reservation>;
}

/// Best-effort notification toward the kitchen. Callers never fail an
/// order or reservation on a notifier error.
#[async_trait]
pub trait Notifier: Send + Sync {
  async fn order_placed(&self, order: &Order) -> anyhow::Result<()>;
  async fn reservation_booked(&self, reservation: &Reservation) -> anyhow::Result<()>;
}

/// Delivery of one rendered email to the provider.
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, message: &EmailMessage) -> anyhow::Result<()>;
}
