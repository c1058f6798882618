//! Customer verification lifecycle settings

use serde::{Deserialize, Serialize};

/// Default code time-to-live in minutes
pub const DEFAULT_TTL_MINUTES: i64 = 30;

/// Deployment-level settings for the customer verification lifecycle.
///
/// `expose_code` controls whether registration responses carry the plaintext
/// verification code as a preview. It is a development and demo convenience;
/// production deployments must disable it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationSettings {
    /// Minutes before an issued verification code expires
    pub ttl_minutes: i64,

    /// Whether to include the plaintext code in registration responses
    pub expose_code: bool,
}

impl Default for VerificationSettings {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_TTL_MINUTES,
            expose_code: true,
        }
    }
}

impl VerificationSettings {
    /// Create from environment variables
    /// (`VERIFICATION_TTL_MINUTES`, `VERIFICATION_CODE_PREVIEW`)
    pub fn from_env() -> Self {
        let ttl_minutes = std::env::var("VERIFICATION_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_TTL_MINUTES);
        let expose_code = std::env::var("VERIFICATION_CODE_PREVIEW")
            .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "off"))
            .unwrap_or(true);

        Self {
            ttl_minutes,
            expose_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = VerificationSettings::default();
        assert_eq!(settings.ttl_minutes, 30);
        assert!(settings.expose_code);
    }
}
