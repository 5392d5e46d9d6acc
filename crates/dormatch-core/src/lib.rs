//! Dormatch Core - Domain model and reassignment engine for two-person rooms
//!
//! This crate provides the state-transition core of dormatch:
//! - `Occupant`, `Group` and `CompatScore` for the people being placed
//! - `Room`, a fixed two-slot container, and `Partition`/`PartitionPair`
//!   for the full per-group room sets
//! - `resolve_move`, the pure function that turns a [`MoveRequest`] into a
//!   committed reassignment or a tagged rejection
//!
//! The engine never touches I/O: seeding, logging and persistence live in
//! `dormatch-session`.

pub mod engine;
pub mod error;
pub mod occupant;
pub mod partition;
pub mod room;

#[cfg(test)]
pub(crate) mod test_utils;

pub use engine::{resolve_move, MoveEffect, MoveRequest};
pub use error::{DomainError, MoveRejection};
pub use occupant::{CompatScore, Group, Occupant};
pub use partition::{Partition, PartitionPair};
pub use room::{Room, SLOT_COUNT};
