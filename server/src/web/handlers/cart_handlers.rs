// server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::sessions::SessionId;
use crate::state::AppState;
use delices_core::cart::Cart;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
pub struct AddToCartRequestPayload {
  pub product_id: Uuid,
  /// Omitted means one, as in the menu's "add" button.
  #[serde(default = "default_quantity")]
  pub quantity: u32,
}

fn default_quantity() -> u32 {
  1
}

#[derive(Deserialize, Debug)]
pub struct UpdateCartRequestPayload {
  pub product_id: Uuid,
  /// Zero or negative removes the line.
  pub quantity: i64,
}

#[derive(Deserialize, Debug)]
pub struct RemoveFromCartRequestPayload {
  pub product_id: Uuid,
}

/// The cart as every cart endpoint reports it.
pub fn cart_snapshot(cart: &Cart) -> serde_json::Value {
  json!({
    "items": cart.items(),
    "itemCount": cart.item_count(),
    "subtotal": cart.subtotal(),
    "total": cart.total(),
  })
}

// --- Handler Implementations ---

#[instrument(name = "handler::view_cart", skip(app_state), fields(session_id = %session.0))]
pub async fn view_cart_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
) -> Result<HttpResponse, ApiError> {
  let cart = app_state.sessions.cart(session.0);
  let snapshot = cart_snapshot(&cart.read());
  Ok(HttpResponse::Ok().json(snapshot))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload),
    fields(session_id = %session.0, product_id = %req_payload.product_id, quantity = %req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
  req_payload: web::Json<AddToCartRequestPayload>,
) -> Result<HttpResponse, ApiError> {
  // Snapshot from the live catalog entry; from here on the line item is
  // decoupled from the product.
  let product = app_state
    .catalog
    .find_product(req_payload.product_id)
    .await?
    .ok_or_else(|| ApiError::NotFound("Produit introuvable".to_string()))?;
  if !product.is_available {
    return Err(ApiError::Validation(
      "Ce produit n'est pas disponible actuellement".to_string(),
    ));
  }

  let cart = app_state.sessions.cart(session.0);
  let snapshot = {
    let mut guard = cart.write();
    guard.add_item(&product, req_payload.quantity);
    cart_snapshot(&guard)
  };

  info!(product = %product.name, "item added to cart");
  Ok(HttpResponse::Ok().json(json!({
    "message": "Article ajouté au panier.",
    "cart": snapshot,
  })))
}

#[instrument(
    name = "handler::update_cart_item",
    skip(app_state, req_payload),
    fields(session_id = %session.0, product_id = %req_payload.product_id, quantity = %req_payload.quantity)
)]
pub async fn update_cart_item_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
  req_payload: web::Json<UpdateCartRequestPayload>,
) -> Result<HttpResponse, ApiError> {
  let cart = app_state.sessions.cart(session.0);
  let snapshot = {
    let mut guard = cart.write();
    guard.update_quantity(req_payload.product_id, req_payload.quantity);
    cart_snapshot(&guard)
  };
  Ok(HttpResponse::Ok().json(json!({ "cart": snapshot })))
}

#[instrument(
    name = "handler::remove_from_cart",
    skip(app_state, req_payload),
    fields(session_id = %session.0, product_id = %req_payload.product_id)
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
  req_payload: web::Json<RemoveFromCartRequestPayload>,
) -> Result<HttpResponse, ApiError> {
  let cart = app_state.sessions.cart(session.0);
  let snapshot = {
    let mut guard = cart.write();
    guard.remove_item(req_payload.product_id);
    cart_snapshot(&guard)
  };
  Ok(HttpResponse::Ok().json(json!({ "cart": snapshot })))
}

#[instrument(name = "handler::clear_cart", skip(app_state), fields(session_id = %session.0))]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
) -> Result<HttpResponse, ApiError> {
  let cart = app_state.sessions.cart(session.0);
  let snapshot = {
    let mut guard = cart.write();
    guard.clear();
    cart_snapshot(&guard)
  };
  Ok(HttpResponse::Ok().json(json!({ "cart": snapshot })))
}
