//! Adapter implementations of the chat repository port.

pub mod memory;
pub mod postgres;
