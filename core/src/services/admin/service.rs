//! Admin profile use cases

use std::sync::Arc;

use pl_shared::utils::validation::validators;
use uuid::Uuid;

use crate::domain::entities::admin::AdminProfile;
use crate::errors::DomainError;
use crate::repositories::AdminRepository;

/// Dashboard view used when a new admin does not name one
const DEFAULT_VIEW: &str = "admin";

/// Input for creating an admin profile
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub display_name: String,
    pub email: String,
    /// Defaults to the admin dashboard when absent
    pub preferred_view: Option<String>,
}

/// Admin profile management
pub struct AdminService<A>
where
    A: AdminRepository,
{
    admins: Arc<A>,
}

impl<A> AdminService<A>
where
    A: AdminRepository,
{
    pub fn new(admins: Arc<A>) -> Self {
        Self { admins }
    }

    /// Create an admin profile. The email must be unused.
    pub async fn create_admin(&self, input: NewAdmin) -> Result<AdminProfile, DomainError> {
        if !validators::not_empty(&input.display_name) {
            return Err(DomainError::validation("Display name must not be empty"));
        }
        if !validators::is_valid_email(&input.email) {
            return Err(DomainError::validation("Invalid admin email address"));
        }

        let preferred_view = input
            .preferred_view
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_VIEW.to_string());

        let admin = self
            .admins
            .create(AdminProfile::new(
                input.display_name,
                input.email,
                preferred_view,
            ))
            .await?;

        tracing::info!(admin_id = %admin.id, event = "admin_created", "Admin profile created");
        Ok(admin)
    }

    pub async fn get_admin(&self, id: Uuid) -> Result<AdminProfile, DomainError> {
        self.admins
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("admin"))
    }

    pub async fn list_admins(&self) -> Result<Vec<AdminProfile>, DomainError> {
        self.admins.list().await
    }

    /// Switch which dashboard the admin lands on.
    pub async fn set_preferred_view(
        &self,
        id: Uuid,
        preferred_view: &str,
    ) -> Result<AdminProfile, DomainError> {
        if !validators::not_empty(preferred_view) {
            return Err(DomainError::validation("Preferred view must not be empty"));
        }

        let mut admin = self.get_admin(id).await?;
        admin.set_preferred_view(preferred_view.trim().to_string());
        self.admins.update(admin).await
    }
}
