//! Test fixtures shared across the crate's test modules.

use crate::occupant::{CompatScore, Group, Occupant};
use crate::partition::{Partition, PartitionPair};
use crate::room::Room;

/// Creates an occupant with a name derived from its id.
pub fn occupant(id: &str, group: Group, score: i64) -> Occupant {
    Occupant::new(id, format!("Student {id}"), group, CompatScore::of(score))
}

/// Creates a room from `(id, score)` occupant specs, left-aligned:
/// one spec fills slot 0, two specs fill both slots.
pub fn room(id: &str, group: Group, specs: &[(&str, i64)], score: i64) -> Room {
    let mut slots = [None, None];
    for (index, (occupant_id, occupant_score)) in specs.iter().enumerate().take(2) {
        slots[index] = Some(occupant(occupant_id, group, *occupant_score));
    }
    Room::new(id, group, slots, CompatScore::of(score)).expect("valid test room")
}

/// A pair with two group-A rooms (`A-Room-1` = [a1, a2], `A-Room-2` =
/// [a3, a4]) and one group-B room (`B-Room-1` = [b1, b2]).
pub fn two_room_pair() -> PartitionPair {
    let a = Partition::new(
        Group::A,
        vec![
            room("A-Room-1", Group::A, &[("a1", 80), ("a2", 60)], 70),
            room("A-Room-2", Group::A, &[("a3", 40), ("a4", 20)], 30),
        ],
    )
    .expect("valid partition");
    let b = Partition::new(
        Group::B,
        vec![room("B-Room-1", Group::B, &[("b1", 50), ("b2", 90)], 70)],
    )
    .expect("valid partition");
    PartitionPair::new(a, b).expect("valid pair")
}

/// Slot contents of a room as ids, `None` for empty slots.
pub fn layout(room: &Room) -> [Option<String>; 2] {
    [
        room.slot_at(0).unwrap().map(|o| o.id().to_string()),
        room.slot_at(1).unwrap().map(|o| o.id().to_string()),
    ]
}

/// Sorted occupant-id census of a pair, for conservation checks.
pub fn census(pair: &PartitionPair) -> Vec<String> {
    let mut ids = pair.occupant_ids();
    ids.sort();
    ids
}
