// server/src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::sessions::CartSessions;
use delices_core::flow::{OrderFlow, ReservationFlow};
use delices_core::ports::{OrderStore, ProductCatalog, ReservationStore};

#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  pub sessions: Arc<CartSessions>,
  pub catalog: Arc<dyn ProductCatalog>,
  pub orders: Arc<dyn OrderStore>,
  pub reservations: Arc<dyn ReservationStore>,
  pub order_flow: Arc<OrderFlow>,
  pub reservation_flow: Arc<ReservationFlow>,
}
