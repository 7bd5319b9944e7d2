//! Admin console for `StaffNet`.
//!
//! Administrators change access levels, ban and remove staff, and toggle
//! maintenance mode. Every successful change appends an entry to the audit
//! log.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
