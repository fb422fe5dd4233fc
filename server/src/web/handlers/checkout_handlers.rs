// server/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::ApiError;
use crate::sessions::SessionId;
use crate::state::AppState;
use delices_core::checkout::CustomerDetails;

#[instrument(
    name = "handler::submit_order",
    skip(app_state, req_payload),
    fields(session_id = %session.0, order_type = %req_payload.order_type)
)]
pub async fn submit_order_handler(
  app_state: web::Data<AppState>,
  session: SessionId,
  req_payload: web::Json<CustomerDetails>,
) -> Result<HttpResponse, ApiError> {
  let cart = app_state.sessions.cart(session.0);
  let details: CustomerDetails = req_payload.into_inner();

  // The flow owns the sequencing: validate, persist, notify
  // best-effort, clear. Any error leaves the cart as it was.
  let order = app_state.order_flow.submit(&cart, &details).await?;

  info!(order_number = %order.order_number, "checkout completed");
  Ok(HttpResponse::Created().json(json!({
    "message": format!("Commande {} créée avec succès.", order.order_number),
    "orderNumber": order.order_number,
    "order": order,
  })))
}

#[derive(Deserialize, Debug)]
pub struct ConfirmationQuery {
  #[serde(default)]
  pub order: Option<String>,
}

/// Confirmation data for the success screen. Without a valid order
/// number the screen is unreachable: the caller is sent back to the
/// home view instead.
#[instrument(name = "handler::order_confirmation", skip(app_state, query))]
pub async fn order_confirmation_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ConfirmationQuery>,
) -> Result<HttpResponse, ApiError> {
  let home = app_state.config.app_base_url.clone();

  let Some(order_number) = query.order.as_deref().filter(|number| !number.is_empty()) else {
    warn!("confirmation requested without an order number");
    return Ok(
      HttpResponse::SeeOther()
        .insert_header(("Location", home))
        .finish(),
    );
  };

  match app_state.orders.find_by_number(order_number).await? {
    Some(order) => Ok(HttpResponse::Ok().json(json!({
      "orderNumber": order.order_number,
      "status": order.status,
      "total": order.total,
      "createdAt": order.created_at,
    }))),
    None => {
      warn!(order_number, "confirmation requested for an unknown order");
      Ok(
        HttpResponse::SeeOther()
          .insert_header(("Location", home))
          .finish(),
      )
    }
  }
}
