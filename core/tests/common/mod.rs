// tests/common/mod.rs
#![allow(dead_code)] // Not every helper is used by every test file.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use delices_core::model::{
  NewOrder, NewReservation, Order, OrderStatus, Product, Reservation, ReservationStatus,
};
use delices_core::notify::EmailMessage;
use delices_core::ports::{Mailer, Notifier, OrderStore, ReservationStore};
use tracing::Level;
use uuid::Uuid;

// --- Catalog fixtures ---

pub fn sample_product(name: &str, price: i64) -> Product {
  Product {
    id: Uuid::new_v4(),
    name: name.to_string(),
    description: None,
    price,
    image_url: None,
    category: "Plats".to_string(),
    is_available: true,
    created_at: Utc::now(),
    updated_at: Utc::now(),
  }
}

pub fn sample_reservation() -> Reservation {
  Reservation {
    id: Uuid::new_v4(),
    reservation_number: "RES-0001".to_string(),
    customer_name: "Aïssatou Diallo".to_string(),
    customer_email: "aissatou@example.com".to_string(),
    customer_phone: Some("+224 620 00 00 00".to_string()),
    reservation_date: chrono::NaiveDate::from_ymd_opt(2026, 8, 14).unwrap(),
    reservation_time: chrono::NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
    party_size: 4,
    notes: None,
    status: ReservationStatus::Pending,
    created_at: Utc::now(),
    updated_at: Utc::now(),
  }
}

// --- In-memory collaborator doubles ---

/// Order store double. Assigns `ORD-000N` numbers the way the real
/// repository's sequence does; flips to failing when asked.
#[derive(Default)]
pub struct MemoryOrderStore {
  orders: Mutex<Vec<Order>>,
  next_number: AtomicU64,
  fail: AtomicBool,
}

impl MemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn failing() -> Self {
    let store = Self::default();
    store.fail.store(true, Ordering::SeqCst);
    store
  }

  pub fn set_failing(&self, fail: bool) {
    self.fail.store(fail, Ordering::SeqCst);
  }

  pub fn created_count(&self) -> usize {
    self.orders.lock().unwrap().len()
  }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
  async fn create_order(&self, draft: NewOrder) -> anyhow::Result<Order> {
    if self.fail.load(Ordering::SeqCst) {
      anyhow::bail!("database unavailable");
    }
    let number = self.next_number.fetch_add(1, Ordering::SeqCst) + 1;
    let now = Utc::now();
    let order = Order {
      id: Uuid::new_v4(),
      order_number: format!("ORD-{:04}", number),
      customer_name: draft.customer_name,
      customer_phone: draft.customer_phone,
      customer_address: draft.customer_address,
      order_type: draft.order_type,
      payment_method: draft.payment_method,
      items: draft.items,
      subtotal: draft.subtotal,
      total: draft.total,
      status: OrderStatus::Pending,
      notes: draft.notes,
      user_id: draft.user_id,
      created_at: now,
      updated_at: now,
    };
    self.orders.lock().unwrap().push(order.clone());
    Ok(order)
  }

  async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Order>> {
    Ok(
      self
        .orders
        .lock()
        .unwrap()
        .iter()
        .find(|order| order.id == id)
        .cloned(),
    )
  }

  async fn find_by_number(&self, order_number: &str) -> anyhow::Result<Option<Order>> {
    Ok(
      self
        .orders
        .lock()
        .unwrap()
        .iter()
        .find(|order| order.order_number == order_number)
        .cloned(),
    )
  }

  async fn list_orders(&self) -> anyhow::Result<Vec<Order>> {
    let mut orders = self.orders.lock().unwrap().clone();
    orders.reverse();
    Ok(orders)
  }

  async fn update_status(&self, id: Uuid, status: OrderStatus) -> anyhow::Result<Order> {
    let mut orders = self.orders.lock().unwrap();
    let order = orders
      .iter_mut()
      .find(|order| order.id == id)
      .ok_or_else(|| anyhow::anyhow!("order {id} not found"))?;
    order.status = status;
    order.updated_at = Utc::now();
    Ok(order.clone())
  }
}

#[derive(Default)]
pub struct MemoryReservationStore {
  reservations: Mutex<Vec<Reservation>>,
  next_number: AtomicU64,
  fail: AtomicBool,
}

impl MemoryReservationStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn failing() -> Self {
    let store = Self::default();
    store.fail.store(true, Ordering::SeqCst);
    store
  }
}

#[async_trait]
impl ReservationStore for MemoryReservationStore {
  async fn create_reservation(&self, draft: NewReservation) -> anyhow::Result<Reservation> {
    if self.fail.load(Ordering::SeqCst) {
      anyhow::bail!("database unavailable");
    }
    let number = self.next_number.fetch_add(1, Ordering::SeqCst) + 1;
    let now = Utc::now();
    let reservation = Reservation {
      id: Uuid::new_v4(),
      reservation_number: format!("RES-{:04}", number),
      customer_name: draft.customer_name,
      customer_email: draft.customer_email,
      customer_phone: draft.customer_phone,
      reservation_date: draft.reservation_date,
      reservation_time: draft.reservation_time,
      party_size: draft.party_size,
      notes: draft.notes,
      status: ReservationStatus::Pending,
      created_at: now,
      updated_at: now,
    };
    self.reservations.lock().unwrap().push(reservation.clone());
    Ok(reservation)
  }

  async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Reservation>> {
    Ok(
      self
        .reservations
        .lock()
        .unwrap()
        .iter()
        .find(|reservation| reservation.id == id)
        .cloned(),
    )
  }

  async fn list_reservations(&self) -> anyhow::Result<Vec<Reservation>> {
    let mut reservations = self.reservations.lock().unwrap().clone();
    reservations.sort_by_key(|r| (r.reservation_date, r.reservation_time));
    Ok(reservations)
  }

  async fn update_status(
    &self,
    id: Uuid,
    status: ReservationStatus,
  ) -> anyhow::Result<Reservation> {
    let mut reservations = self.reservations.lock().unwrap();
    let reservation = reservations
      .iter_mut()
      .find(|reservation| reservation.id == id)
      .ok_or_else(|| anyhow::anyhow!("reservation {id} not found"))?;
    reservation.status = status;
    reservation.updated_at = Utc::now();
    Ok(reservation.clone())
  }
}

/// Notifier double recording which numbers were announced; flips to
/// failing to exercise the non-fatal contract.
#[derive(Default)]
pub struct RecordingNotifier {
  notified: Mutex<Vec<String>>,
  fail: AtomicBool,
}

impl RecordingNotifier {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn failing() -> Self {
    let notifier = Self::default();
    notifier.fail.store(true, Ordering::SeqCst);
    notifier
  }

  pub fn notified(&self) -> Vec<String> {
    self.notified.lock().unwrap().clone()
  }
}

#[async_trait]
impl Notifier for RecordingNotifier {
  async fn order_placed(&self, order: &Order) -> anyhow::Result<()> {
    if self.fail.load(Ordering::SeqCst) {
      anyhow::bail!("email provider rejected the message");
    }
    self
      .notified
      .lock()
      .unwrap()
      .push(order.order_number.clone());
    Ok(())
  }

  async fn reservation_booked(&self, reservation: &Reservation) -> anyhow::Result<()> {
    if self.fail.load(Ordering::SeqCst) {
      anyhow::bail!("email provider rejected the message");
    }
    self
      .notified
      .lock()
      .unwrap()
      .push(reservation.reservation_number.clone());
    Ok(())
  }
}

/// Mailer double for dispatcher tests: keeps every rendered message.
#[derive(Default)]
pub struct RecordingMailer {
  sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingMailer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn sent(&self) -> Vec<EmailMessage> {
    self.sent.lock().unwrap().clone()
  }
}

#[async_trait]
impl Mailer for RecordingMailer {
  async fn send(&self, message: &EmailMessage) -> anyhow::Result<()> {
    self.sent.lock().unwrap().push(message.clone());
    Ok(())
  }
}

// --- Helper for tracing setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
