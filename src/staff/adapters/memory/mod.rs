//! In-memory adapters for the staff directory.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! tests and local runs without a database.

mod identity;
mod repository;

pub use identity::SessionIdentityProvider;
pub use repository::InMemoryStaffRepository;
