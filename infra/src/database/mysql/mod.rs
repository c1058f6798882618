//! MySQL repository implementations.

mod admin_repository_impl;
mod cart_repository_impl;
mod customer_repository_impl;
mod favorite_repository_impl;
mod feedback_repository_impl;
mod inventory_repository_impl;
mod store_repository_impl;

pub use admin_repository_impl::MySqlAdminRepository;
pub use cart_repository_impl::MySqlCartRepository;
pub use customer_repository_impl::MySqlCustomerRepository;
pub use favorite_repository_impl::MySqlFavoriteRepository;
pub use feedback_repository_impl::MySqlFeedbackRepository;
pub use inventory_repository_impl::MySqlInventoryRepository;
pub use store_repository_impl::MySqlStoreRepository;

use pl_core::errors::DomainError;

/// Map an insert error, turning a unique-key violation into a conflict on
/// the named resource.
pub(crate) fn map_insert_error(resource: &str, e: sqlx::Error) -> DomainError {
    match &e {
        sqlx::Error::Database(db) if db.kind() == sqlx::error::ErrorKind::UniqueViolation => {
            DomainError::Conflict {
                resource: resource.to_string(),
            }
        }
        _ => DomainError::Database {
            message: format!("Failed to insert {}: {}", resource, e),
        },
    }
}

/// Wrap any other query error as an opaque database fault.
pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("{}: {}", context, e),
    }
}
