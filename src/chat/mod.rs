//! Staff chat panel.
//!
//! Messages are appended by the signed-in actor and read back as a bounded,
//! chronological history. Sending is two-phase: viewers first see the
//! message as pending and then as delivered or failed.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
