// server/src/lib.rs

//! HTTP service wrapping the `delices-core` ordering domain: actix-web
//! handlers, PostgreSQL repositories, the Resend email client and the
//! in-memory session cart registry. The binary in `main.rs` wires this
//! together; the library target exists so the HTTP tests can build the
//! same app against in-memory collaborators.

pub mod config;
pub mod db;
pub mod errors;
pub mod services;
pub mod sessions;
pub mod state;
pub mod web;
