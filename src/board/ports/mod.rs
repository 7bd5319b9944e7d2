//! Ports for the task board read model.

mod query;

pub use query::{BoardQueryError, BoardQueryResult, TaskBoardQuery};
