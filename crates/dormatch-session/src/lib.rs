//! Dormatch Session - owns the partitions while an operator edits them.
//!
//! This crate wraps the pure engine in `dormatch-core` with everything a
//! live editing session needs:
//! - [`SessionController`]: applies move requests in issue order and
//!   exports the final assignment
//! - [`SessionManager`]: async hand-off of the finalized assignment to
//!   the persistence collaborator
//! - [`seed`]: materializes the initial partitions from a
//!   `dormatch-config` roster
//! - [`fixture`]: reproducible mock assignments for tests and demos
//! - [`telemetry`]: `tracing` subscriber setup

pub mod export;
pub mod fixture;
pub mod manager;
pub mod seed;
pub mod session;
pub mod telemetry;

pub use export::RoomExport;
pub use manager::{SessionError, SessionEvent, SessionManager};
pub use seed::SeedError;
pub use session::SessionController;
