//! The outbound export shape handed to the persistence collaborator.

use serde::{Deserialize, Serialize};

use dormatch_core::{PartitionPair, Room};

/// One room of the finalized assignment.
///
/// `occupant_ids` holds 0-2 entries in slot order; `score` is the fixed
/// room score the session was seeded with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomExport {
    pub room_id: String,
    pub occupant_ids: Vec<String>,
    pub score: i64,
}

impl RoomExport {
    /// Snapshots one room.
    pub fn of_room(room: &Room) -> Self {
        Self {
            room_id: room.id().to_string(),
            occupant_ids: room.occupant_ids(),
            score: room.score().value(),
        }
    }
}

/// Exports every room of both partitions, group A rooms first, each
/// partition in seeding order. This matches the save order of the
/// original admin surface (all male rooms, then all female rooms).
pub fn export_pair(pair: &PartitionPair) -> Vec<RoomExport> {
    use dormatch_core::Group;

    [Group::A, Group::B]
        .into_iter()
        .flat_map(|group| pair.partition(group).rooms().iter().map(RoomExport::of_room))
        .collect()
}
