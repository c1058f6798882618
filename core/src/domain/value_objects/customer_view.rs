//! Public customer account view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::customer::CustomerAccount;

/// The subset of account fields safe to return to a caller.
///
/// Never carries the password hash, the verification code hash, or the
/// code expiry timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPublic {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&CustomerAccount> for CustomerPublic {
    fn from(account: &CustomerAccount) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            is_verified: account.is_verified,
            created_at: account.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_view_excludes_secrets() {
        let mut account = CustomerAccount::new(
            "Fern".to_string(),
            "Gully".to_string(),
            "fern@plantera.dev".to_string(),
            None,
            "secret_hash".to_string(),
        );
        account.issue_code("code_hash".to_string(), Utc::now());

        let view = CustomerPublic::from(&account);
        let json = serde_json::to_string(&view).unwrap();

        assert!(!json.contains("secret_hash"));
        assert!(!json.contains("code_hash"));
        assert!(!json.contains("expires"));
        assert!(json.contains("fern@plantera.dev"));
    }
}
