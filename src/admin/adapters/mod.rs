//! Adapter implementations of the admin ports.

pub mod memory;
pub mod postgres;
