//! Fixed-capacity two-slot rooms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, MoveRejection};
use crate::occupant::{CompatScore, Group, Occupant};

/// Number of slots in every room. Rooms are two-person by product
/// definition; capacity is structural, not configured.
pub const SLOT_COUNT: usize = 2;

/// A two-slot container holding 0-2 occupants of a single group.
///
/// The room's score is fixed at creation (normally by
/// [`CompatScore::floor_mean`] over its seeded occupants) and survives
/// every move: score is a property of the seeded membership, not of who
/// currently sleeps where.
///
/// # Examples
///
/// ```
/// use dormatch_core::{CompatScore, Group, Occupant, Room};
///
/// let ana = Occupant::new("20240001", "Ana", Group::A, CompatScore::of(80));
/// let room = Room::new("A-Room-1", Group::A, [Some(ana), None], CompatScore::of(80)).unwrap();
/// assert!(!room.is_full());
/// assert_eq!(room.occupant_ids(), vec!["20240001"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    id: String,
    group: Group,
    slots: [Option<Occupant>; SLOT_COUNT],
    score: CompatScore,
}

impl Room {
    /// Creates a room, verifying that every occupant matches the room's
    /// group and that the two slots hold distinct occupants.
    pub fn new(
        id: impl Into<String>,
        group: Group,
        slots: [Option<Occupant>; SLOT_COUNT],
        score: CompatScore,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        for occupant in slots.iter().flatten() {
            if occupant.group() != group {
                return Err(DomainError::OccupantGroupMismatch {
                    occupant_id: occupant.id().to_string(),
                    room_id: id,
                    room_group: group,
                });
            }
        }
        if let [Some(first), Some(second)] = &slots {
            if first.id() == second.id() {
                return Err(DomainError::DuplicateOccupant(first.id().to_string()));
            }
        }
        Ok(Self {
            id,
            group,
            slots,
            score,
        })
    }

    /// Unique id within a partition.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The group every occupant of this room must belong to.
    #[inline]
    pub fn group(&self) -> Group {
        self.group
    }

    /// The fixed, externally computed room score.
    #[inline]
    pub fn score(&self) -> CompatScore {
        self.score
    }

    /// Returns the occupant in the given slot, or `None` for an empty
    /// slot. Fails with `IndexOutOfRange` for an index outside {0, 1}.
    pub fn slot_at(&self, index: usize) -> Result<Option<&Occupant>, MoveRejection> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or(MoveRejection::IndexOutOfRange(index))
    }

    /// True iff both slots hold an occupant.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of occupied slots (0-2).
    pub fn occupant_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Iterates the occupants currently placed in this room.
    pub fn occupants(&self) -> impl Iterator<Item = &Occupant> {
        self.slots.iter().flatten()
    }

    /// Ids of the current occupants, in slot order (0-2 entries).
    pub fn occupant_ids(&self) -> Vec<String> {
        self.occupants().map(|o| o.id().to_string()).collect()
    }

    /// Replaces the content of one slot.
    ///
    /// This is the only mutation primitive on a room. It is crate-private
    /// so that the engine in this crate is the single call path that can
    /// rearrange occupants, which is what keeps the no-duplication
    /// invariant reviewable in one place. No validation happens here
    /// beyond the range check.
    pub(crate) fn set_slot(
        &mut self,
        index: usize,
        occupant: Option<Occupant>,
    ) -> Result<(), MoveRejection> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(MoveRejection::IndexOutOfRange(index))?;
        *slot = occupant;
        Ok(())
    }
}
