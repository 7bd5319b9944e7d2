//! Unit tests for the admin console.
