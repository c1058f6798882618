//! Secret hashing implementations.

mod hasher;

pub use hasher::Sha256SecretHasher;
