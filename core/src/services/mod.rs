//! Business services containing domain logic and use cases.

pub mod admin;
pub mod feedback;
pub mod shopping;
pub mod storefront;
pub mod verification;

// Re-export commonly used types
pub use admin::{AdminService, NewAdmin};
pub use feedback::FeedbackService;
pub use shopping::ShoppingService;
pub use storefront::{NewInventoryItem, NewStore, StoreService};
pub use verification::{
    ClockTrait, CodeGeneratorTrait, MailServiceTrait, RegisterCustomer, RegistrationResult,
    SecretHasherTrait, VerificationConfig, VerificationService,
};
