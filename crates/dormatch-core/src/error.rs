//! Error types for the dormatch core.

use std::fmt;

use thiserror::Error;

use crate::occupant::Group;

/// A rejected move.
///
/// Every variant is recoverable by the caller: the engine returns the
/// rejection as a value and leaves both partitions in exactly their
/// pre-call state. The interactive layer typically restores the dragged
/// element and keeps the session alive.
// Implemented by hand rather than via `#[derive(Error)]`: thiserror would
// treat the `source` field of `CrossGroupMove` as the error's cause, which
// it is not - it is the group of the source room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    /// The source and destination rooms belong to different groups.
    CrossGroupMove { source: Group, dest: Group },

    /// The source slot holds no occupant; an empty slot cannot be relocated.
    EmptySource { room_id: String, slot: usize },

    /// No room with this id exists in either partition.
    RoomNotFound(String),

    /// A slot index outside {0, 1} was used where no clamping applies.
    IndexOutOfRange(usize),
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::CrossGroupMove { source, dest } => write!(
                f,
                "occupants of group {source} and group {dest} rooms cannot be mixed"
            ),
            MoveRejection::EmptySource { room_id, slot } => {
                write!(f, "slot {slot} of room {room_id} is empty")
            }
            MoveRejection::RoomNotFound(id) => write!(f, "room {id} not found"),
            MoveRejection::IndexOutOfRange(idx) => {
                write!(f, "slot index {idx} out of range for a two-slot room")
            }
        }
    }
}

impl std::error::Error for MoveRejection {}

/// Structural errors raised while constructing rooms and partitions.
///
/// These only occur during seeding; the per-move path never builds new
/// rooms and so can never raise them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A room was placed in a partition of a different group.
    #[error("room {room_id} has group {room_group}, expected {expected}")]
    RoomGroupMismatch {
        room_id: String,
        room_group: Group,
        expected: Group,
    },

    /// An occupant was placed in a room of a different group.
    #[error("occupant {occupant_id} does not match group {room_group} of room {room_id}")]
    OccupantGroupMismatch {
        occupant_id: String,
        room_id: String,
        room_group: Group,
    },

    /// The same occupant id appeared in more than one slot.
    #[error("occupant {0} appears in more than one slot")]
    DuplicateOccupant(String),

    /// The same room id appeared more than once in a partition.
    #[error("duplicate room id {0}")]
    DuplicateRoom(String),

    /// Both partitions of a pair carried the same group value.
    #[error("partition pair needs one partition per group, got {0} twice")]
    DuplicateGroup(Group),
}
