//! Public feedback form.

mod service;

pub use service::FeedbackService;
