//! Admin profile entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A back-office admin profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: Uuid,
    pub display_name: String,
    /// Unique admin email
    pub email: String,
    /// Which dashboard view the admin lands on ("admin", "store", ...)
    pub preferred_view: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AdminProfile {
    pub fn new(display_name: String, email: String, preferred_view: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            display_name,
            email,
            preferred_view,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_preferred_view(&mut self, preferred_view: String) {
        self.preferred_view = preferred_view;
        self.updated_at = Utc::now();
    }
}
