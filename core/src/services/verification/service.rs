//! Verification lifecycle service implementation

use std::sync::Arc;

use chrono::Duration;
use constant_time_eq::constant_time_eq;
use pl_shared::utils::validation::validators;

use crate::domain::entities::customer::CustomerAccount;
use crate::domain::value_objects::customer_view::CustomerPublic;
use crate::errors::{DomainError, VerificationError};
use crate::repositories::CustomerRepository;

use super::config::VerificationConfig;
use super::traits::{ClockTrait, CodeGeneratorTrait, MailServiceTrait, SecretHasherTrait};
use super::types::{RegisterCustomer, RegistrationResult, VerificationOutcome};

const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_NAME_LENGTH: usize = 100;

/// Drives the customer verification lifecycle.
///
/// Generic over the repository and mail delivery so the API layer can wire
/// concrete implementations while tests substitute mocks.
pub struct VerificationService<R, M>
where
    R: CustomerRepository,
    M: MailServiceTrait,
{
    customers: Arc<R>,
    mailer: Arc<M>,
    hasher: Arc<dyn SecretHasherTrait>,
    clock: Arc<dyn ClockTrait>,
    code_generator: Arc<dyn CodeGeneratorTrait>,
    config: VerificationConfig,
}

impl<R, M> VerificationService<R, M>
where
    R: CustomerRepository,
    M: MailServiceTrait,
{
    pub fn new(
        customers: Arc<R>,
        mailer: Arc<M>,
        hasher: Arc<dyn SecretHasherTrait>,
        clock: Arc<dyn ClockTrait>,
        code_generator: Arc<dyn CodeGeneratorTrait>,
        config: VerificationConfig,
    ) -> Self {
        Self {
            customers,
            mailer,
            hasher,
            clock,
            code_generator,
            config,
        }
    }

    /// Register a customer account and issue a verification code.
    ///
    /// A fresh email creates a pending account. An email with a verified
    /// account is rejected with [`VerificationError::DuplicateEmail`]. An
    /// email with a still-pending account has its profile overwritten and a
    /// new code issued, invalidating the previous one.
    pub async fn register(
        &self,
        input: RegisterCustomer,
    ) -> Result<RegistrationResult, DomainError> {
        self.validate_registration(&input)?;

        tracing::info!(email = %input.email, event = "registration_attempt", "Customer registration requested");

        let existing = self.customers.find_by_email(&input.email).await?;

        let (account, renewed) = match existing {
            Some(account) if account.is_verified => {
                tracing::warn!(email = %input.email, event = "registration_duplicate", "Email already verified");
                return Err(VerificationError::DuplicateEmail.into());
            }
            Some(mut account) => {
                account.overwrite_profile(
                    input.first_name,
                    input.last_name,
                    input.phone,
                    self.hasher.hash_password(&input.password),
                );
                (account, true)
            }
            None => {
                let account = CustomerAccount::new(
                    input.first_name,
                    input.last_name,
                    input.email,
                    input.phone,
                    self.hasher.hash_password(&input.password),
                );
                (account, false)
            }
        };

        let code = self.issue_and_store(account, renewed).await?;
        Ok(code)
    }

    /// Validate a code and move the account to verified.
    ///
    /// Verifying an already-verified account succeeds as a no-op so clients
    /// can safely retry.
    pub async fn verify(
        &self,
        email: &str,
        code: &str,
    ) -> Result<VerificationOutcome, DomainError> {
        let mut account = self
            .customers
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("customer"))?;

        if account.is_verified {
            tracing::info!(customer_id = %account.id, event = "verify_noop", "Account already verified");
            return Ok(VerificationOutcome {
                customer: CustomerPublic::from(&account),
                already_verified: true,
            });
        }

        let (stored_hash, expires_at) = match (
            account.verification_code_hash.as_deref(),
            account.verification_expires_at,
        ) {
            (Some(hash), Some(expires)) => (hash, expires),
            _ => {
                tracing::warn!(customer_id = %account.id, event = "verify_no_pending", "No pending code");
                return Err(VerificationError::NoPendingVerification.into());
            }
        };

        if self.clock.now() > expires_at {
            tracing::warn!(customer_id = %account.id, event = "verify_expired", "Verification code expired");
            return Err(VerificationError::CodeExpired.into());
        }

        let submitted_hash = self.hasher.hash_code(code);
        if !constant_time_eq(stored_hash.as_bytes(), submitted_hash.as_bytes()) {
            tracing::warn!(customer_id = %account.id, event = "verify_mismatch", "Verification code mismatch");
            return Err(VerificationError::CodeMismatch.into());
        }

        account.mark_verified();
        let account = self.customers.update(account).await?;

        tracing::info!(customer_id = %account.id, event = "customer_verified", "Customer verified");

        Ok(VerificationOutcome {
            customer: CustomerPublic::from(&account),
            already_verified: false,
        })
    }

    /// Issue a fresh code for a pending account.
    ///
    /// The previous code, expired or not, stops being valid.
    pub async fn resend(&self, email: &str) -> Result<RegistrationResult, DomainError> {
        let account = self
            .customers
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("customer"))?;

        if account.is_verified {
            tracing::warn!(customer_id = %account.id, event = "resend_verified", "Resend on verified account");
            return Err(VerificationError::AlreadyVerified.into());
        }

        self.issue_and_store(account, true).await
    }

    /// Issue a code on the given account, persist it, and dispatch delivery.
    ///
    /// `renewed` distinguishes first-time creation from re-issue and selects
    /// between `create` and `update` on the repository. A unique-key conflict
    /// on create means a concurrent registration won the race.
    async fn issue_and_store(
        &self,
        mut account: CustomerAccount,
        renewed: bool,
    ) -> Result<RegistrationResult, DomainError> {
        let code = self.code_generator.generate_code();
        let expires_at = self.clock.now() + Duration::minutes(self.config.ttl_minutes);
        account.issue_code(self.hasher.hash_code(&code), expires_at);

        let account = if renewed {
            self.customers.update(account).await?
        } else {
            match self.customers.create(account).await {
                Ok(account) => account,
                Err(DomainError::Conflict { .. }) => {
                    return Err(VerificationError::DuplicateEmail.into());
                }
                Err(e) => return Err(e),
            }
        };

        match self.mailer.deliver_code(&account.email, &code).await {
            Ok(message_id) => {
                tracing::info!(
                    customer_id = %account.id,
                    message_id = %message_id,
                    renewed = renewed,
                    event = "code_issued",
                    "Verification code issued"
                );
            }
            Err(e) => {
                // Issuance already persisted; a failed delivery is recoverable
                // through the resend endpoint.
                tracing::warn!(
                    customer_id = %account.id,
                    error = %e,
                    event = "code_delivery_failed",
                    "Verification code delivery failed"
                );
            }
        }

        let code_preview = self.config.expose_code.then_some(code);
        let message = if renewed {
            "A new verification code has been sent to your email."
        } else {
            "Account created. Enter the verification code sent to your email."
        };

        Ok(RegistrationResult {
            customer: CustomerPublic::from(&account),
            verification_required: true,
            code_preview,
            renewed,
            message: message.to_string(),
        })
    }

    fn validate_registration(&self, input: &RegisterCustomer) -> Result<(), DomainError> {
        if !validators::is_valid_email(&input.email) {
            return Err(DomainError::validation("Invalid email address"));
        }
        if !validators::length_between(&input.first_name, 1, MAX_NAME_LENGTH) {
            return Err(DomainError::validation(
                "First name must be between 1 and 100 characters",
            ));
        }
        if !validators::length_between(&input.last_name, 1, MAX_NAME_LENGTH) {
            return Err(DomainError::validation(
                "Last name must be between 1 and 100 characters",
            ));
        }
        if input.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(
                "Password must be at least 8 characters",
            ));
        }
        Ok(())
    }
}
