// server/src/sessions.rs

//! One cart per anonymous browsing session. The client mints a UUID,
//! sends it as `X-Session-Id` on every cart and checkout call, and the
//! registry hands back the same `SharedCart` for it. Carts are never
//! persisted; a restart empties every session.

use std::collections::HashMap;

use actix_web::{FromRequest, HttpRequest};
use parking_lot::Mutex;
use tracing::warn;
use uuid::Uuid;

use crate::errors::ApiError;
use delices_core::cart::SharedCart;

#[derive(Default)]
pub struct CartSessions {
  carts: Mutex<HashMap<Uuid, SharedCart>>,
}

impl CartSessions {
  pub fn new() -> Self {
    Self::default()
  }

  /// The session's cart handle, created empty on first use.
  pub fn cart(&self, session: Uuid) -> SharedCart {
    self
      .carts
      .lock()
      .entry(session)
      .or_insert_with(SharedCart::new)
      .clone()
  }

  pub fn session_count(&self) -> usize {
    self.carts.lock().len()
  }
}

/// Extractor for the session header. Missing or malformed ids are a
/// client error; the server never invents a session on its own.
#[derive(Debug, Clone, Copy)]
pub struct SessionId(pub Uuid);

impl FromRequest for SessionId {
  type Error = ApiError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    if let Some(header) = req.headers().get("X-Session-Id") {
      if let Ok(raw) = header.to_str() {
        if let Ok(session) = Uuid::parse_str(raw) {
          return futures_util::future::ready(Ok(SessionId(session)));
        }
      }
    }
    warn!("SessionId extractor: missing or invalid X-Session-Id header.");
    futures_util::future::ready(Err(ApiError::Session(
      "Missing or invalid X-Session-Id header.".to_string(),
    )))
  }
}
