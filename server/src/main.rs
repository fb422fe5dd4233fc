// server/src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use sqlx::PgPool;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use delices_core::flow::{OrderFlow, ReservationFlow};
use delices_core::notify::Dispatcher;
use delices_core::ports::Mailer;
use delices_server::config::AppConfig;
use delices_server::db::{self, PgOrderStore, PgProductCatalog, PgReservationStore};
use delices_server::services::{DisabledMailer, ResendMailer};
use delices_server::sessions::CartSessions;
use delices_server::state::AppState;
use delices_server::web::routes::configure_app_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting Délices ordering server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  let db_pool = match PgPool::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  if app_config.seed_db {
    if let Err(e) = db::seed_products(&db_pool).await {
      tracing::error!(error = %e, "Failed to seed the products table.");
    }
  }

  // Collaborators behind the core's ports.
  let catalog = Arc::new(PgProductCatalog::new(db_pool.clone()));
  let orders = Arc::new(PgOrderStore::new(db_pool.clone()));
  let reservations = Arc::new(PgReservationStore::new(db_pool.clone()));

  let mailer: Arc<dyn Mailer> = match &app_config.resend_api_key {
    Some(key) => Arc::new(ResendMailer::new(key.clone(), app_config.mail_from.clone())),
    None => {
      tracing::warn!("RESEND_API_KEY not set; notification emails are disabled.");
      Arc::new(DisabledMailer)
    }
  };
  let dispatcher = Arc::new(Dispatcher::new(mailer, app_config.kitchen_email.clone()));

  let app_state = AppState {
    config: app_config.clone(),
    sessions: Arc::new(CartSessions::new()),
    catalog: catalog.clone(),
    orders: orders.clone(),
    reservations: reservations.clone(),
    order_flow: Arc::new(OrderFlow::new(orders, dispatcher.clone())),
    reservation_flow: Arc::new(ReservationFlow::new(reservations, dispatcher)),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
