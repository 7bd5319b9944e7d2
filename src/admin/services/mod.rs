//! Admin console orchestration service.

mod console;

pub use console::{AdminConsoleError, AdminConsoleResult, AdminConsoleService};
