//! Customer account entity and its verification lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer's registration record, keyed by email.
///
/// Verification state moves `PENDING -> VERIFIED` and never leaves
/// `VERIFIED`. The code hash and its expiry are always set or cleared
/// together; the mutators below are the only way this struct changes
/// verification state, which is what keeps that pairing intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAccount {
    /// Unique identifier for the account
    pub id: Uuid,

    pub first_name: String,

    pub last_name: String,

    /// Unique across all accounts regardless of verification state
    pub email: String,

    pub phone: Option<String>,

    /// One-way hash of the password; the plaintext is never stored
    pub password_hash: String,

    /// Whether the email address has been proven via a verification code
    pub is_verified: bool,

    /// One-way hash of the currently pending verification code
    pub verification_code_hash: Option<String>,

    /// Instant after which the pending code is no longer accepted
    pub verification_expires_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl CustomerAccount {
    /// Creates a new unverified account with no pending code.
    ///
    /// Callers are expected to issue a verification code immediately via
    /// [`CustomerAccount::issue_code`].
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        phone: Option<String>,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            phone,
            password_hash,
            is_verified: false,
            verification_code_hash: None,
            verification_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stores a freshly issued code hash together with its expiry.
    ///
    /// Replaces any previously pending code; only the latest code is valid.
    pub fn issue_code(&mut self, code_hash: String, expires_at: DateTime<Utc>) {
        self.verification_code_hash = Some(code_hash);
        self.verification_expires_at = Some(expires_at);
        self.updated_at = Utc::now();
    }

    /// Marks the account verified and clears all verification material.
    pub fn mark_verified(&mut self) {
        self.is_verified = true;
        self.verification_code_hash = None;
        self.verification_expires_at = None;
        self.updated_at = Utc::now();
    }

    /// Whether a code hash and expiry pair is currently stored.
    pub fn has_pending_code(&self) -> bool {
        self.verification_code_hash.is_some() && self.verification_expires_at.is_some()
    }

    /// Overwrites profile fields and password hash on a still-pending account.
    ///
    /// Used by the re-register convenience path; the caller issues a new
    /// code afterwards.
    pub fn overwrite_profile(
        &mut self,
        first_name: String,
        last_name: String,
        phone: Option<String>,
        password_hash: String,
    ) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.phone = phone;
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}
