//! Verification code delivery.

mod log_mailer;

pub use log_mailer::LogMailService;
