//! `StaffNet`: staff directory, task board and approval workflow.
//!
//! The crate centres on the task lifecycle manager, a role-gated state
//! machine that moves tasks from creation through proof-of-work submission
//! to review. Around it sit a staff directory, a task board read model, a
//! chat panel and an admin console.
//!
//! # Architecture
//!
//! `StaffNet` follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//! - **Services**: Orchestration that resolves the acting staff member,
//!   applies domain rules and persists the result
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle state machine and service
//! - [`staff`]: Staff directory, access levels and identity providers
//! - [`board`]: Task board join and dashboard counters
//! - [`chat`]: Staff chat with two-phase delivery
//! - [`admin`]: Admin console and audit log
//! - [`tentative`] and [`notify`]: Two-phase updates and change notifications
//! - [`config`], [`database`] and [`telemetry`]: Runtime plumbing for the
//!   `staffnet` binary

pub mod admin;
pub mod board;
pub mod chat;
pub mod config;
pub mod database;
pub mod notify;
pub mod staff;
pub mod task;
pub mod telemetry;
pub mod tentative;
