//! Adapter implementations for staff directory ports.

pub mod directory_identity;
pub mod memory;
pub mod postgres;

pub use directory_identity::DirectoryIdentityProvider;
