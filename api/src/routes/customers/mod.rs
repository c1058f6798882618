//! Customer registration and verification endpoints.

mod register;
mod resend;
mod verify;

pub use register::register;
pub use resend::resend_code;
pub use verify::verify;
