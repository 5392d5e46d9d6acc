//! Partitions: the complete room sets, one per group value.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::MoveEffect;
use crate::error::{DomainError, MoveRejection};
use crate::occupant::Group;
use crate::room::Room;

/// The ordered set of rooms for one group value.
///
/// Construction verifies the structural invariants once: every room
/// carries the partition's group and no occupant or room id appears
/// twice. The engine's group guard and single mutation path keep them
/// true afterwards.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Partition {
    group: Group,
    rooms: Vec<Room>,
}

impl Partition {
    /// Creates a partition from rooms that must all belong to `group`.
    pub fn new(group: Group, rooms: Vec<Room>) -> Result<Self, DomainError> {
        let mut room_ids = HashSet::new();
        let mut occupant_ids = HashSet::new();
        for room in &rooms {
            if room.group() != group {
                return Err(DomainError::RoomGroupMismatch {
                    room_id: room.id().to_string(),
                    room_group: room.group(),
                    expected: group,
                });
            }
            if !room_ids.insert(room.id().to_string()) {
                return Err(DomainError::DuplicateRoom(room.id().to_string()));
            }
            for occupant in room.occupants() {
                if !occupant_ids.insert(occupant.id().to_string()) {
                    return Err(DomainError::DuplicateOccupant(occupant.id().to_string()));
                }
            }
        }
        Ok(Self { group, rooms })
    }

    /// An empty partition for the given group.
    pub fn empty(group: Group) -> Self {
        Self {
            group,
            rooms: Vec::new(),
        }
    }

    /// The group value shared by every room in this partition.
    #[inline]
    pub fn group(&self) -> Group {
        self.group
    }

    /// The rooms, in seeding order.
    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Looks up a room by id.
    pub fn find_room(&self, room_id: &str) -> Result<&Room, MoveRejection> {
        self.rooms
            .iter()
            .find(|r| r.id() == room_id)
            .ok_or_else(|| MoveRejection::RoomNotFound(room_id.to_string()))
    }

    /// Ids of every occupant currently placed in this partition, in
    /// room and slot order. Used by invariant checks and the export.
    pub fn occupant_ids(&self) -> Vec<String> {
        self.rooms
            .iter()
            .flat_map(|r| r.occupant_ids())
            .collect()
    }

    fn position(&self, room_id: &str) -> Option<usize> {
        self.rooms.iter().position(|r| r.id() == room_id)
    }
}

/// Both partitions of a session, one per group value.
///
/// This is the state the reassignment engine reads and the session
/// controller owns. [`PartitionPair::commit`] is the only public
/// mutation: it replaces whole room snapshots produced by an accepted
/// [`MoveEffect`], so a half-applied move cannot be observed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartitionPair {
    a: Partition,
    b: Partition,
}

impl PartitionPair {
    /// Creates a pair from two partitions of distinct groups.
    pub fn new(first: Partition, second: Partition) -> Result<Self, DomainError> {
        if first.group() == second.group() {
            return Err(DomainError::DuplicateGroup(first.group()));
        }
        let (a, b) = if first.group() == Group::A {
            (first, second)
        } else {
            (second, first)
        };
        Ok(Self { a, b })
    }

    /// The partition holding the rooms of `group`.
    pub fn partition(&self, group: Group) -> &Partition {
        match group {
            Group::A => &self.a,
            Group::B => &self.b,
        }
    }

    /// Looks up a room by id across both partitions.
    pub fn find_room(&self, room_id: &str) -> Result<&Room, MoveRejection> {
        self.a
            .find_room(room_id)
            .or_else(|_| self.b.find_room(room_id))
    }

    /// The group of the room with the given id, used to reject
    /// cross-group moves before any mutation is attempted.
    pub fn group_of(&self, room_id: &str) -> Result<Group, MoveRejection> {
        self.find_room(room_id).map(|r| r.group())
    }

    /// Ids of every occupant across both partitions, group A first.
    pub fn occupant_ids(&self) -> Vec<String> {
        let mut ids = self.a.occupant_ids();
        ids.extend(self.b.occupant_ids());
        ids
    }

    /// Applies an accepted move effect by replacing the affected room
    /// snapshots.
    ///
    /// Both rooms are located before either is written, so a failed
    /// lookup leaves the pair untouched. Effects produced by
    /// [`resolve_move`](crate::resolve_move) against this pair always
    /// locate successfully.
    pub fn commit(&mut self, effect: MoveEffect) -> Result<(), MoveRejection> {
        match effect {
            MoveEffect::Reordered { room } => {
                let slot = self.locate(room.id())?;
                self.write(slot, room);
                Ok(())
            }
            MoveEffect::Relocated { source, dest } => {
                let source_slot = self.locate(source.id())?;
                let dest_slot = self.locate(dest.id())?;
                self.write(source_slot, source);
                self.write(dest_slot, dest);
                Ok(())
            }
        }
    }

    fn locate(&self, room_id: &str) -> Result<(Group, usize), MoveRejection> {
        if let Some(index) = self.a.position(room_id) {
            return Ok((Group::A, index));
        }
        if let Some(index) = self.b.position(room_id) {
            return Ok((Group::B, index));
        }
        Err(MoveRejection::RoomNotFound(room_id.to_string()))
    }

    fn write(&mut self, (group, index): (Group, usize), room: Room) {
        let partition = match group {
            Group::A => &mut self.a,
            Group::B => &mut self.b,
        };
        partition.rooms[index] = room;
    }
}
