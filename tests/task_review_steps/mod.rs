//! Step definitions for task proof review scenarios.

mod given;
mod then;
mod when;
pub mod world;
