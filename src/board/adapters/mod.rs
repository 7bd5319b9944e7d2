//! Adapter implementations of the board query port.

pub mod memory;
pub mod postgres;
