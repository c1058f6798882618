//! In-memory implementation of CustomerRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::customer::CustomerAccount;
use crate::errors::DomainError;

use super::trait_::CustomerRepository;

/// Mock customer repository backed by a map, enforcing email uniqueness
/// the way the real store's unique index does.
#[derive(Default)]
pub struct MockCustomerRepository {
    accounts: Arc<RwLock<HashMap<Uuid, CustomerAccount>>>,
}

impl MockCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<CustomerAccount>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerAccount>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn create(&self, account: CustomerAccount) -> Result<CustomerAccount, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::Conflict {
                resource: "customer email".to_string(),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: CustomerAccount) -> Result<CustomerAccount, DomainError> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(DomainError::NotFound {
                resource: "customer".to_string(),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(email: &str) -> CustomerAccount {
        CustomerAccount::new(
            "Fern".to_string(),
            "Gully".to_string(),
            email.to_string(),
            None,
            "hash".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let repo = MockCustomerRepository::new();
        let created = repo.create(account("a@x.com")).await.unwrap();

        let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(repo.find_by_email("b@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = MockCustomerRepository::new();
        repo.create(account("a@x.com")).await.unwrap();

        let err = repo.create(account("a@x.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_account_is_not_found() {
        let repo = MockCustomerRepository::new();
        let err = repo.update(account("a@x.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
