//! Customer verification lifecycle.
//!
//! Owns the `PENDING -> VERIFIED` state machine for customer accounts:
//! - code issuance on registration (and re-registration of a pending email)
//! - code validation with expiry and hash comparison
//! - resend of a fresh code
//!
//! Delivery, hashing, time, and randomness are all injected through the
//! traits in [`traits`], so the service itself performs no I/O beyond the
//! customer repository.

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::{VerificationConfig, CODE_LENGTH};
pub use service::VerificationService;
pub use traits::{
    ClockTrait, CodeGeneratorTrait, MailServiceTrait, OsRngCodeGenerator, SecretHasherTrait,
    SystemClock,
};
pub use types::{RegisterCustomer, RegistrationResult, VerificationOutcome};
