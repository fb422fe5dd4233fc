// server/src/web/handlers/reservation_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use super::order_handlers::UpdateStatusRequestPayload;
use crate::errors::ApiError;
use crate::state::AppState;
use delices_core::flow::ReservationDetails;
use delices_core::model::ReservationStatus;

#[instrument(
    name = "handler::create_reservation",
    skip(app_state, req_payload),
    fields(party_size = %req_payload.party_size)
)]
pub async fn create_reservation_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ReservationDetails>,
) -> Result<HttpResponse, ApiError> {
  let details: ReservationDetails = req_payload.into_inner();
  let reservation = app_state.reservation_flow.book(&details).await?;

  info!(reservation_number = %reservation.reservation_number, "reservation booked");
  Ok(HttpResponse::Created().json(json!({
    "message": format!("Réservation {} créée avec succès.", reservation.reservation_number),
    "reservationNumber": reservation.reservation_number,
    "reservation": reservation,
  })))
}

/// Back-office listing, ascending by date.
#[instrument(name = "handler::list_reservations", skip(app_state))]
pub async fn list_reservations_handler(
  app_state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
  let reservations = app_state.reservations.list_reservations().await?;
  Ok(HttpResponse::Ok().json(json!({ "reservations": reservations })))
}

#[instrument(
    name = "handler::update_reservation_status",
    skip(app_state, path, req_payload),
    fields(status = %req_payload.status)
)]
pub async fn update_reservation_status_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<UpdateStatusRequestPayload<ReservationStatus>>,
) -> Result<HttpResponse, ApiError> {
  let id = path.into_inner();
  let reservation = app_state
    .reservations
    .find_by_id(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("Réservation {} introuvable", id)))?;

  reservation.status.ensure_transition(req_payload.status)?;

  let updated = app_state
    .reservations
    .update_status(id, req_payload.status)
    .await?;
  info!(
    reservation_number = %updated.reservation_number,
    status = %updated.status,
    "reservation status updated"
  );
  Ok(HttpResponse::Ok().json(json!({
    "message": "Le statut de la réservation a été modifié.",
    "reservation": updated,
  })))
}
