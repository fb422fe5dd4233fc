// core/src/checkout.rs

//! Synchronous gate in front of order submission. Rules run in order and
//! the first failure wins; one message is surfaced at a time, exactly as
//! the checkout form behaves.

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::cart::Cart;
use crate::model::{NewOrder, OrderType, PaymentMethod};

/// Customer-supplied checkout fields, pre-trim. `user_id` is pass-through
/// metadata for signed-in customers.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDetails {
  pub customer_name: String,
  pub customer_phone: String,
  #[serde(default)]
  pub customer_address: Option<String>,
  pub order_type: OrderType,
  pub payment_method: PaymentMethod,
  #[serde(default)]
  pub notes: Option<String>,
  #[serde(default)]
  pub user_id: Option<Uuid>,
}

/// One failed rule, carrying the message shown to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
  #[error("Veuillez entrer votre nom")]
  NameRequired,
  #[error("Veuillez entrer votre numéro de téléphone")]
  PhoneRequired,
  #[error("Veuillez entrer votre adresse de livraison")]
  DeliveryAddressRequired,
  #[error("Votre panier est vide")]
  EmptyCart,
  #[error("Veuillez entrer votre adresse e-mail")]
  EmailRequired,
  #[error("Le nombre de personnes doit être d'au moins 1")]
  PartySizeTooSmall,
}

/// Evaluates the required-field contract. Phone numbers are accepted as
/// free text; no format validation is applied.
pub fn validate(details: &CustomerDetails, cart: &Cart) -> Result<(), ValidationIssue> {
  if details.customer_name.trim().is_empty() {
    return Err(ValidationIssue::NameRequired);
  }
  if details.customer_phone.trim().is_empty() {
    return Err(ValidationIssue::PhoneRequired);
  }
  if details.order_type == OrderType::Delivery
    && details
      .customer_address
      .as_deref()
      .map_or(true, |address| address.trim().is_empty())
  {
    return Err(ValidationIssue::DeliveryAddressRequired);
  }
  if cart.is_empty() {
    return Err(ValidationIssue::EmptyCart);
  }
  Ok(())
}

/// Builds the persistence payload from a validated cart: trimmed fields,
/// the address dropped for pickups, empty notes collapsed to `None`, and
/// totals computed from the snapshot.
pub fn build_order(details: &CustomerDetails, cart: &Cart) -> NewOrder {
  let customer_address = match details.order_type {
    OrderType::Delivery => details
      .customer_address
      .as_deref()
      .map(|address| address.trim().to_string()),
    OrderType::Pickup => None,
  };
  let notes = details
    .notes
    .as_deref()
    .map(str::trim)
    .filter(|notes| !notes.is_empty())
    .map(str::to_string);

  NewOrder {
    customer_name: details.customer_name.trim().to_string(),
    customer_phone: details.customer_phone.trim().to_string(),
    customer_address,
    order_type: details.order_type,
    payment_method: details.payment_method,
    items: cart.items().to_vec(),
    subtotal: cart.subtotal(),
    total: cart.total(),
    notes,
    user_id: details.user_id,
  }
}
