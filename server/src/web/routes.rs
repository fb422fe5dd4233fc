// server/src/web/routes.rs

use actix_web::web;

// Liveness only; readiness would ping the database.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` (and the HTTP tests) to configure services for
// the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Catalog Routes
      .route(
        "/products",
        web::get().to(crate::web::handlers::product_handlers::list_products_handler),
      )
      .route(
        "/menu",
        web::get().to(crate::web::handlers::product_handlers::menu_handler),
      )
      // Cart Routes (session-scoped via the X-Session-Id header)
      .service(
        web::scope("/cart")
          .route(
            "",
            web::get().to(crate::web::handlers::cart_handlers::view_cart_handler),
          )
          .route(
            "/add",
            web::post().to(crate::web::handlers::cart_handlers::add_to_cart_handler),
          )
          .route(
            "/update",
            web::post().to(crate::web::handlers::cart_handlers::update_cart_item_handler),
          )
          .route(
            "/remove",
            web::post().to(crate::web::handlers::cart_handlers::remove_from_cart_handler),
          )
          .route(
            "/clear",
            web::post().to(crate::web::handlers::cart_handlers::clear_cart_handler),
          ),
      )
      // Checkout Routes
      .route(
        "/checkout",
        web::post().to(crate::web::handlers::checkout_handlers::submit_order_handler),
      )
      .route(
        "/order-success",
        web::get().to(crate::web::handlers::checkout_handlers::order_confirmation_handler),
      )
      // Order Routes (back office)
      .service(
        web::scope("/orders")
          .route(
            "",
            web::get().to(crate::web::handlers::order_handlers::list_orders_handler),
          )
          .route(
            "/{order_id}/status",
            web::patch().to(crate::web::handlers::order_handlers::update_order_status_handler),
          ),
      )
      // Reservation Routes
      .service(
        web::scope("/reservations")
          .route(
            "",
            web::post().to(crate::web::handlers::reservation_handlers::create_reservation_handler),
          )
          .route(
            "",
            web::get().to(crate::web::handlers::reservation_handlers::list_reservations_handler),
          )
          .route(
            "/{reservation_id}/status",
            web::patch()
              .to(crate::web::handlers::reservation_handlers::update_reservation_status_handler),
          ),
      ),
  );
}
