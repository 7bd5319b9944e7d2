//! Board read service.

mod board;

pub use board::{TaskBoardError, TaskBoardResult, TaskBoardService};
