// core/src/cart.rs

//! The customer's in-progress selection. One cart per session, entirely
//! transient: it is created empty, mutated by the menu and cart screens,
//! and cleared on successful submission.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::model::{OrderItem, Product};

/// Ordered collection of line items, at most one per product id. Adding
/// a product that is already present increments its quantity instead of
/// duplicating the line.
#[derive(Debug, Clone, Default)]
pub struct Cart {
  items: Vec<OrderItem>,
}

impl Cart {
  pub fn new() -> Self {
    Cart { items: Vec::new() }
  }

  /// Appends a snapshot of `product`, or bumps the quantity of the
  /// existing line. Quantity is clamped to a minimum of 1, matching the
  /// quantity selector.
  pub fn add_item(&mut self, product: &Product, quantity: u32) {
    let quantity = quantity.max(1);
    if let Some(item) = self.items.iter_mut().find(|item| item.product_id == product.id) {
      item.quantity += quantity;
      return;
    }
    self.items.push(OrderItem {
      product_id: product.id,
      name: product.name.clone(),
      price: product.price,
      quantity,
      image_url: product.image_url.clone(),
    });
  }

  /// Removes the matching line; no-op when absent.
  pub fn remove_item(&mut self, product_id: uuid::Uuid) {
    self.items.retain(|item| item.product_id != product_id);
  }

  /// Sets the line's quantity exactly. Zero or negative removes the
  /// line, as in the cart screen's stepper.
  pub fn update_quantity(&mut self, product_id: uuid::Uuid, quantity: i64) {
    if quantity <= 0 {
      self.remove_item(product_id);
      return;
    }
    if let Some(item) = self.items.iter_mut().find(|item| item.product_id == product_id) {
      item.quantity = quantity.min(i64::from(u32::MAX)) as u32;
    }
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn items(&self) -> &[OrderItem] {
    &self.items
  }

  /// Sum of quantities across all lines.
  pub fn item_count(&self) -> u32 {
    self.items.iter().map(|item| item.quantity).sum()
  }

  pub fn subtotal(&self) -> i64 {
    self.items.iter().map(OrderItem::line_total).sum()
  }

  /// Currently identical to the subtotal. Fees, discounts and taxes
  /// would land here; they are a non-goal for this version.
  pub fn total(&self) -> i64 {
    self.subtotal()
  }
}

struct CartCell {
  cart: RwLock<Cart>,
  submitting: AtomicBool,
}

/// A session's cart with shared ownership and interior mutability, plus
/// the submission-in-progress flag consulted by the order flow.
///
/// IMPORTANT: lock guards obtained from this struct are blocking and
/// MUST NOT be held across `.await` suspension points.
pub struct SharedCart(Arc<CartCell>);

impl SharedCart {
  pub fn new() -> Self {
    SharedCart(Arc::new(CartCell {
      cart: RwLock::new(Cart::new()),
      submitting: AtomicBool::new(false),
    }))
  }

  /// Acquires a read lock. The returned guard MUST be dropped before any
  /// `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, Cart> {
    self.0.cart.read()
  }

  /// Acquires a write lock. The returned guard MUST be dropped before
  /// any `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, Cart> {
    self.0.cart.write()
  }

  /// Claims the cart for one submission. Returns `None` while another
  /// submission holds the token; the token releases on drop.
  pub fn begin_submission(&self) -> Option<SubmissionToken> {
    if self
      .0
      .submitting
      .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
      .is_ok()
    {
      Some(SubmissionToken(Arc::clone(&self.0)))
    } else {
      None
    }
  }

  pub fn submission_in_flight(&self) -> bool {
    self.0.submitting.load(Ordering::Acquire)
  }
}

impl Clone for SharedCart {
  fn clone(&self) -> Self {
    SharedCart(Arc::clone(&self.0))
  }
}

impl Default for SharedCart {
  fn default() -> Self {
    Self::new()
  }
}

/// Exclusive right to run the submission flow for one cart. Dropping the
/// token (on success or on any error path) re-opens the cart for
/// submission.
pub struct SubmissionToken(Arc<CartCell>);

impl Drop for SubmissionToken {
  fn drop(&mut self) {
    self.0.submitting.store(false, Ordering::Release);
  }
}
