//! Unit tests for the task board read model.

mod board_tests;
