// tests/cart_tests.rs
mod common;

use common::*;
use delices_core::cart::Cart;

#[test]
fn add_item_appends_a_snapshot_line() {
  let product = sample_product("Poulet Braisé", 85_000);
  let mut cart = Cart::new();

  cart.add_item(&product, 2);

  assert_eq!(cart.items().len(), 1);
  let line = &cart.items()[0];
  assert_eq!(line.product_id, product.id);
  assert_eq!(line.name, "Poulet Braisé");
  assert_eq!(line.price, 85_000);
  assert_eq!(line.quantity, 2);
}

#[test]
fn re_adding_a_product_increments_its_line() {
  let product = sample_product("Alloco", 15_000);
  let mut cart = Cart::new();

  cart.add_item(&product, 1);
  cart.add_item(&product, 3);

  // One line, never two, for the same product id.
  assert_eq!(cart.items().len(), 1);
  assert_eq!(cart.items()[0].quantity, 4);
}

#[test]
fn add_item_clamps_quantity_to_one() {
  let product = sample_product("Jus de Gingembre", 10_000);
  let mut cart = Cart::new();

  cart.add_item(&product, 0);

  assert_eq!(cart.items()[0].quantity, 1);
}

#[test]
fn update_quantity_sets_the_line_exactly() {
  let product = sample_product("Riz Gras", 60_000);
  let mut cart = Cart::new();
  cart.add_item(&product, 2);

  cart.update_quantity(product.id, 5);

  assert_eq!(cart.items()[0].quantity, 5);
}

#[test]
fn update_quantity_to_zero_or_below_removes_the_line() {
  let poulet = sample_product("Poulet Braisé", 85_000);
  let alloco = sample_product("Alloco", 15_000);
  let mut cart = Cart::new();
  cart.add_item(&poulet, 1);
  cart.add_item(&alloco, 1);

  cart.update_quantity(poulet.id, 0);
  cart.update_quantity(alloco.id, -5);

  assert!(cart.is_empty());
}

#[test]
fn remove_item_is_a_no_op_when_absent() {
  let product = sample_product("Riz Gras", 60_000);
  let mut cart = Cart::new();
  cart.add_item(&product, 1);

  cart.remove_item(uuid::Uuid::new_v4());

  assert_eq!(cart.items().len(), 1);
}

#[test]
fn totals_are_the_sum_over_line_items() {
  let poulet = sample_product("Poulet Braisé", 85_000);
  let alloco = sample_product("Alloco", 15_000);
  let mut cart = Cart::new();
  cart.add_item(&poulet, 2);
  cart.add_item(&alloco, 3);

  let expected = 85_000 * 2 + 15_000 * 3;
  assert_eq!(cart.subtotal(), expected);
  assert_eq!(cart.total(), expected);
  assert_eq!(cart.item_count(), 5);
}

#[test]
fn cart_lines_are_decoupled_from_the_live_product() {
  let mut product = sample_product("Poulet Braisé", 85_000);
  let mut cart = Cart::new();
  cart.add_item(&product, 1);

  // Price changes after the snapshot never reach the cart.
  product.price = 120_000;
  product.name = "Poulet Braisé (nouveau prix)".to_string();

  assert_eq!(cart.items()[0].price, 85_000);
  assert_eq!(cart.items()[0].name, "Poulet Braisé");
  assert_eq!(cart.subtotal(), 85_000);
}

#[test]
fn clear_empties_the_cart() {
  let product = sample_product("Alloco", 15_000);
  let mut cart = Cart::new();
  cart.add_item(&product, 2);

  cart.clear();

  assert!(cart.is_empty());
  assert_eq!(cart.item_count(), 0);
  assert_eq!(cart.total(), 0);
}

#[test]
fn lines_keep_their_insertion_order() {
  let first = sample_product("Entrée", 20_000);
  let second = sample_product("Plat", 85_000);
  let third = sample_product("Dessert", 25_000);
  let mut cart = Cart::new();
  cart.add_item(&first, 1);
  cart.add_item(&second, 1);
  cart.add_item(&third, 1);
  cart.add_item(&first, 1); // bump, must not reorder

  let names: Vec<&str> = cart.items().iter().map(|item| item.name.as_str()).collect();
  assert_eq!(names, vec!["Entrée", "Plat", "Dessert"]);
}
