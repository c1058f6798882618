//! Configuration for the verification lifecycle service

use pl_shared::config::verification::{VerificationSettings, DEFAULT_TTL_MINUTES};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Configuration for the verification lifecycle service
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Minutes before an issued code expires
    pub ttl_minutes: i64,
    /// Whether registration results carry the plaintext code as a preview.
    /// Development/demo convenience; production deployments disable this.
    pub expose_code: bool,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_TTL_MINUTES,
            expose_code: true,
        }
    }
}

impl From<VerificationSettings> for VerificationConfig {
    fn from(settings: VerificationSettings) -> Self {
        Self {
            ttl_minutes: settings.ttl_minutes,
            expose_code: settings.expose_code,
        }
    }
}
