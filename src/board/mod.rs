//! Task board read model for `StaffNet`.
//!
//! The board joins every task with the staff record of its assignee and
//! derives the dashboard counters shown next to it. Joins are performed by
//! the adapters behind [`ports::TaskBoardQuery`]; callers never combine task
//! and staff records themselves.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
