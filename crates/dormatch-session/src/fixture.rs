//! Reproducible mock assignments for tests and demos.
//!
//! Mirrors the mock generator the original admin surface used while the
//! matching backend was stubbed: sequential student numbers in the
//! `2024NNNN` scheme, random scores in 0..100, rooms filled two at a
//! time, room score = floor mean of its occupants.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dormatch_core::{CompatScore, Group, Occupant, Partition, PartitionPair, Room};

/// Builds a fully occupied partition pair with `rooms_per_group` rooms
/// on each side. The same seed always yields the same assignment.
pub fn mock_partitions(rooms_per_group: usize, seed: u64) -> PartitionPair {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut counter = 1u32;

    let a = mock_partition(Group::A, rooms_per_group, &mut rng, &mut counter);
    let b = mock_partition(Group::B, rooms_per_group, &mut rng, &mut counter);
    PartitionPair::new(a, b).expect("mock partitions are structurally valid")
}

fn mock_partition(
    group: Group,
    room_count: usize,
    rng: &mut ChaCha8Rng,
    counter: &mut u32,
) -> Partition {
    let mut rooms = Vec::with_capacity(room_count);
    for number in 1..=room_count {
        let first = mock_occupant(group, rng, counter);
        let second = mock_occupant(group, rng, counter);
        let score = CompatScore::floor_mean(&[first.score(), second.score()]);
        rooms.push(
            Room::new(
                format!("{group}-Room-{number}"),
                group,
                [Some(first), Some(second)],
                score,
            )
            .expect("mock room is structurally valid"),
        );
    }
    Partition::new(group, rooms).expect("mock partition is structurally valid")
}

fn mock_occupant(group: Group, rng: &mut ChaCha8Rng, counter: &mut u32) -> Occupant {
    let id = format!("2024{:04}", *counter);
    let name = format!("Student {group}{counter}");
    *counter += 1;
    Occupant::new(id, name, group, CompatScore::of(rng.random_range(0..100)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_assignment() {
        let first = mock_partitions(3, 42);
        let second = mock_partitions(3, 42);
        assert_eq!(first.occupant_ids(), second.occupant_ids());
        for group in [Group::A, Group::B] {
            let lhs = first.partition(group).rooms();
            let rhs = second.partition(group).rooms();
            for (l, r) in lhs.iter().zip(rhs) {
                assert_eq!(l.score(), r.score());
            }
        }
    }

    #[test]
    fn ids_are_sequential_student_numbers() {
        let pair = mock_partitions(1, 0);
        assert_eq!(pair.occupant_ids(), vec!["20240001", "20240002", "20240003", "20240004"]);
    }

    #[test]
    fn rooms_are_full_and_group_pure() {
        let pair = mock_partitions(4, 9);
        for group in [Group::A, Group::B] {
            let partition = pair.partition(group);
            assert_eq!(partition.rooms().len(), 4);
            for room in partition.rooms() {
                assert!(room.is_full());
                assert!(room.occupants().all(|o| o.group() == group));
            }
        }
    }
}
