// server/src/web/handlers/product_handlers.rs

use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::ApiError;
use crate::state::AppState;
use delices_core::model::Product;

/// Full catalog, ordered by category then name, availability included —
/// the shape the back office reads.
#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
  let products = app_state.catalog.list_products().await?;
  Ok(HttpResponse::Ok().json(json!({ "products": products })))
}

/// The customer-facing menu: available products grouped by category.
/// Groups keep the catalog's name ordering.
#[instrument(name = "handler::menu", skip(app_state))]
pub async fn menu_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
  let products = app_state.catalog.list_products().await?;
  let mut by_category: BTreeMap<String, Vec<Product>> = BTreeMap::new();
  for product in products.into_iter().filter(|product| product.is_available) {
    by_category.entry(product.category.clone()).or_default().push(product);
  }
  Ok(HttpResponse::Ok().json(json!({ "menu": by_category })))
}
