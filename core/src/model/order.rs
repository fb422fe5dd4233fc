// core/src/model/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UnknownValue;
use crate::error::CoreError;

/// Order lifecycle. Orders advance pending -> accepted -> preparing ->
/// completed; cancellation is only possible while pending or accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Accepted,
  Preparing,
  Completed,
  Cancelled,
}

impl OrderStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Accepted => "accepted",
      OrderStatus::Preparing => "preparing",
      OrderStatus::Completed => "completed",
      OrderStatus::Cancelled => "cancelled",
    }
  }

  /// Whether `next` is a legal successor of `self`. Re-asserting the
  /// current status is treated as a no-op and allowed.
  pub fn can_transition_to(&self, next: OrderStatus) -> bool {
    use OrderStatus::*;
    if *self == next {
      return true;
    }
    match (*self, next) {
      (Pending, Accepted) | (Accepted, Preparing) | (Preparing, Completed) => true,
      (Pending, Cancelled) | (Accepted, Cancelled) => true,
      _ => false,
    }
  }

  pub fn ensure_transition(&self, next: OrderStatus) -> Result<(), CoreError> {
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

impl std::str::FromStr for OrderStatus {
  type Err = UnknownValue;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(OrderStatus::Pending),
      "accepted" => Ok(OrderStatus::Accepted),
      "preparing" => Ok(OrderStatus::Preparing),
      "completed" => Ok(OrderStatus::Completed),
      "cancelled" => Ok(OrderStatus::Cancelled),
      other => Err(UnknownValue {
        kind: "order status",
        value: other.to_string(),
      }),
    }
  }
}

impl std::fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
  Delivery,
  Pickup,
}

impl OrderType {
  pub fn as_str(&self) -> &'static str {
    match self {
      OrderType::Delivery => "delivery",
      OrderType::Pickup => "pickup",
    }
  }
}

impl std::str::FromStr for OrderType {
  type Err = UnknownValue;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "delivery" => Ok(OrderType::Delivery),
      "pickup" => Ok(OrderType::Pickup),
      other => Err(UnknownValue {
        kind: "order type",
        value: other.to_string(),
      }),
    }
  }
}

impl std::fmt::Display for OrderType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Recorded as order metadata only; no payment gateway is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
  Cash,
  MobileMoney,
  Card,
}

impl PaymentMethod {
  pub fn as_str(&self) -> &'static str {
    match self {
      PaymentMethod::Cash => "cash",
      PaymentMethod::MobileMoney => "mobile_money",
      PaymentMethod::Card => "card",
    }
  }
}

impl std::str::FromStr for PaymentMethod {
  type Err = UnknownValue;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "cash" => Ok(PaymentMethod::Cash),
      "mobile_money" => Ok(PaymentMethod::MobileMoney),
      "card" => Ok(PaymentMethod::Card),
      other => Err(UnknownValue {
        kind: "payment method",
        value: other.to_string(),
      }),
    }
  }
}

impl std::fmt::Display for PaymentMethod {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A line item snapshot taken from a `Product` at the moment it enters
/// the cart. Later changes to the product never alter an existing item:
/// the cart is a priced snapshot, not a live reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
  pub product_id: Uuid,
  pub name: String,
  pub price: i64,
  pub quantity: u32,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,
}

impl OrderItem {
  pub fn line_total(&self) -> i64 {
    self.price * i64::from(self.quantity)
  }
}

/// The durable record created at checkout. `order_number` is assigned by
/// the persistence collaborator, never by the client.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
  pub id: Uuid,
  pub order_number: String,
  pub customer_name: String,
  pub customer_phone: String,
  pub customer_address: Option<String>,
  pub order_type: OrderType,
  pub payment_method: PaymentMethod,
  pub items: Vec<OrderItem>,
  pub subtotal: i64,
  pub total: i64,
  pub status: OrderStatus,
  pub notes: Option<String>,
  pub user_id: Option<Uuid>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Payload handed to the order persistence collaborator. The address is
/// only present for deliveries; pickups omit it entirely.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
  pub customer_name: String,
  pub customer_phone: String,
  pub customer_address: Option<String>,
  pub order_type: OrderType,
  pub payment_method: PaymentMethod,
  pub items: Vec<OrderItem>,
  pub subtotal: i64,
  pub total: i64,
  pub notes: Option<String>,
  pub user_id: Option<Uuid>,
}

impl NewOrder {
  /// Re-checks the client-side pricing contract before the draft leaves
  /// the process: both totals must equal the sum over the line items.
  pub fn verify_totals(&self) -> Result<(), CoreError> {
    let computed: i64 = self.items.iter().map(OrderItem::line_total).sum();
    if self.subtotal != computed || self.total != computed {
      return Err(CoreError::TotalMismatch {
        expected: computed,
        subtotal: self.subtotal,
        total: self.total,
      });
    }
    Ok(())
  }
}
