//! Task lifecycle management for `StaffNet`.
//!
//! Tasks are created by managers, worked on by their assignee, and closed
//! through a submit/review approval workflow: the assignee submits a proof
//! link, a manager or admin approves (completing the task) or rejects it
//! (sending it back to `InProgress`). The module follows hexagonal
//! architecture:
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
