//! Store profile entity and partial-update merge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A seller's store profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreProfile {
    pub id: Uuid,
    pub name: String,
    /// Unique contact email for the store
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub banner_image: Option<String>,
    pub dashboard_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Enumerated set of updatable store fields.
///
/// Partial updates are an explicit field-by-field merge over this set; a
/// `None` leaves the stored value untouched. Email is deliberately absent:
/// it is the store's identity and is not patchable.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub banner_image: Option<String>,
    pub dashboard_message: Option<String>,
}

impl StoreProfile {
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        bio: Option<String>,
        address: Option<String>,
        banner_image: Option<String>,
        dashboard_message: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            bio,
            address,
            banner_image,
            dashboard_message,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the provided fields into this profile.
    pub fn apply_update(&mut self, update: StoreUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        if let Some(banner_image) = update.banner_image {
            self.banner_image = Some(banner_image);
        }
        if let Some(dashboard_message) = update.dashboard_message {
            self.dashboard_message = Some(dashboard_message);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> StoreProfile {
        StoreProfile::new(
            "Leafy Things".to_string(),
            "hello@leafy.example".to_string(),
            Some("0400000000".to_string()),
            Some("Succulents and ferns".to_string()),
            None,
            None,
            None,
        )
    }

    #[test]
    fn test_apply_update_merges_only_provided_fields() {
        let mut store = store();

        store.apply_update(StoreUpdate {
            bio: Some("Rare tropicals".to_string()),
            ..Default::default()
        });

        assert_eq!(store.bio.as_deref(), Some("Rare tropicals"));
        // Untouched fields keep their values
        assert_eq!(store.name, "Leafy Things");
        assert_eq!(store.phone.as_deref(), Some("0400000000"));
    }

    #[test]
    fn test_apply_update_cannot_change_email() {
        let mut store = store();
        let email = store.email.clone();

        store.apply_update(StoreUpdate {
            name: Some("Leafier Things".to_string()),
            ..Default::default()
        });

        assert_eq!(store.email, email);
        assert_eq!(store.name, "Leafier Things");
    }
}
