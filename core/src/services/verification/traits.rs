//! Injection seams for the verification lifecycle: delivery, hashing,
//! time, and randomness.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::Rng;

use super::config::CODE_LENGTH;

/// Trait for dispatching a verification code to a customer.
///
/// This is the observable issuance event: a real deployment would send an
/// email here. The core never performs delivery itself.
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Deliver a verification code, returning a provider message id
    async fn deliver_code(&self, email: &str, code: &str) -> Result<String, String>;
}

/// One-way hashing of secrets: passwords and verification codes.
///
/// The primitive is opaque to the core; implementations must guarantee the
/// output is never empty and never equals the input.
pub trait SecretHasherTrait: Send + Sync {
    fn hash_password(&self, raw: &str) -> String;
    fn hash_code(&self, code: &str) -> String;
}

/// Source of the current instant, injectable so tests can control expiry
pub trait ClockTrait: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of fresh verification codes
pub trait CodeGeneratorTrait: Send + Sync {
    /// Produce a code of exactly [`CODE_LENGTH`] ASCII digits
    fn generate_code(&self) -> String;
}

/// Wall-clock implementation of [`ClockTrait`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockTrait for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// CSPRNG-backed implementation of [`CodeGeneratorTrait`].
///
/// Each digit is drawn independently and uniformly from 0-9 so leading
/// zeros are kept and the textual code is always exactly six characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRngCodeGenerator;

impl CodeGeneratorTrait for OsRngCodeGenerator {
    fn generate_code(&self) -> String {
        let mut rng = OsRng;
        (0..CODE_LENGTH)
            .map(|_| char::from(b'0' + rng.gen_range(0..=9u8)))
            .collect()
    }
}
