//! Unit tests for the staff directory module.
