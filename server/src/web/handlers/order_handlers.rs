// server/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::state::AppState;
use delices_core::model::OrderStatus;

/// Back-office listing, newest first.
#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
  let orders = app_state.orders.list_orders().await?;
  Ok(HttpResponse::Ok().json(json!({ "orders": orders })))
}

#[derive(Deserialize, Debug)]
pub struct UpdateStatusRequestPayload<S> {
  pub status: S,
}

/// Moves an order along its lifecycle. Jumps outside the diagram are a
/// conflict, not an update.
#[instrument(
    name = "handler::update_order_status",
    skip(app_state, path, req_payload),
    fields(status = %req_payload.status)
)]
pub async fn update_order_status_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<UpdateStatusRequestPayload<OrderStatus>>,
) -> Result<HttpResponse, ApiError> {
  let id = path.into_inner();
  let order = app_state
    .orders
    .find_by_id(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("Commande {} introuvable", id)))?;

  order.status.ensure_transition(req_payload.status)?;

  let updated = app_state.orders.update_status(id, req_payload.status).await?;
  info!(order_number = %updated.order_number, status = %updated.status, "order status updated");
  Ok(HttpResponse::Ok().json(json!({
    "message": "Le statut de la commande a été modifié.",
    "order": updated,
  })))
}
