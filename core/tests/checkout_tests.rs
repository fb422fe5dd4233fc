// tests/checkout_tests.rs
mod common;

use common::*;
use delices_core::cart::Cart;
use delices_core::checkout::{build_order, validate, CustomerDetails, ValidationIssue};
use delices_core::model::{OrderType, PaymentMethod};

fn details(name: &str, phone: &str, address: Option<&str>, order_type: OrderType) -> CustomerDetails {
  CustomerDetails {
    customer_name: name.to_string(),
    customer_phone: phone.to_string(),
    customer_address: address.map(str::to_string),
    order_type,
    payment_method: PaymentMethod::Cash,
    notes: None,
    user_id: None,
  }
}

fn cart_with_one_item() -> Cart {
  let mut cart = Cart::new();
  cart.add_item(&sample_product("Poulet Braisé", 85_000), 1);
  cart
}

#[test]
fn missing_name_wins_even_when_everything_else_is_missing_too() {
  let cart = Cart::new();
  let result = validate(&details("", "", None, OrderType::Delivery), &cart);
  assert_eq!(result, Err(ValidationIssue::NameRequired));
}

#[test]
fn whitespace_only_fields_are_treated_as_empty() {
  let cart = cart_with_one_item();
  assert_eq!(
    validate(&details("   ", "+224 620 00 00 00", None, OrderType::Pickup), &cart),
    Err(ValidationIssue::NameRequired)
  );
  assert_eq!(
    validate(&details("Mamadou Bah", "  \t", None, OrderType::Pickup), &cart),
    Err(ValidationIssue::PhoneRequired)
  );
}

#[test]
fn delivery_requires_an_address() {
  let cart = cart_with_one_item();
  assert_eq!(
    validate(
      &details("Mamadou Bah", "+224 620 00 00 00", None, OrderType::Delivery),
      &cart
    ),
    Err(ValidationIssue::DeliveryAddressRequired)
  );
  assert_eq!(
    validate(
      &details("Mamadou Bah", "+224 620 00 00 00", Some("  "), OrderType::Delivery),
      &cart
    ),
    Err(ValidationIssue::DeliveryAddressRequired)
  );
}

#[test]
fn pickup_passes_without_an_address() {
  let cart = cart_with_one_item();
  assert_eq!(
    validate(
      &details("Mamadou Bah", "+224 620 00 00 00", None, OrderType::Pickup),
      &cart
    ),
    Ok(())
  );
}

#[test]
fn an_empty_cart_is_the_last_rule_checked() {
  let cart = Cart::new();
  assert_eq!(
    validate(
      &details("Mamadou Bah", "+224 620 00 00 00", None, OrderType::Pickup),
      &cart
    ),
    Err(ValidationIssue::EmptyCart)
  );
}

#[test]
fn phone_numbers_are_free_text() {
  let cart = cart_with_one_item();
  for phone in ["00224620000000", "620-00-00-00", "+33 6 12 34 56 78"] {
    assert_eq!(
      validate(&details("Mamadou Bah", phone, None, OrderType::Pickup), &cart),
      Ok(())
    );
  }
}

#[test]
fn build_order_trims_fields_and_drops_the_pickup_address() {
  let cart = cart_with_one_item();
  let mut input = details(
    "  Mamadou Bah ",
    " +224 620 00 00 00 ",
    Some("Quartier Kipé"),
    OrderType::Pickup,
  );
  input.notes = Some("   ".to_string());

  let draft = build_order(&input, &cart);

  assert_eq!(draft.customer_name, "Mamadou Bah");
  assert_eq!(draft.customer_phone, "+224 620 00 00 00");
  assert_eq!(draft.customer_address, None);
  assert_eq!(draft.notes, None);
  assert_eq!(draft.subtotal, 85_000);
  assert_eq!(draft.total, 85_000);
}

#[test]
fn build_order_keeps_the_delivery_address() {
  let cart = cart_with_one_item();
  let input = details(
    "Mamadou Bah",
    "+224 620 00 00 00",
    Some(" Quartier Kipé, Conakry "),
    OrderType::Delivery,
  );

  let draft = build_order(&input, &cart);

  assert_eq!(draft.customer_address.as_deref(), Some("Quartier Kipé, Conakry"));
  assert!(draft.verify_totals().is_ok());
}
