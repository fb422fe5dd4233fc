// server/src/services/mod.rs

pub mod mailer;

pub use mailer::{DisabledMailer, ResendMailer};
