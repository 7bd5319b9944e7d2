//! Staff directory and acting identity for `StaffNet`.
//!
//! This module owns staff records (name, email, access level, ban status)
//! and the identity-provider port that yields the acting staff member for
//! role-gated operations elsewhere in the crate. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
