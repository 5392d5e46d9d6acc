//! The reassignment engine: a pure transition over a partition pair.
//!
//! The original interactive surface threaded mutable array splicing
//! through nested drag-and-drop conditionals. Here the same rules are a
//! single pure function, [`resolve_move`], that reads the current
//! [`PartitionPair`] and either produces fresh room snapshots for the
//! affected rooms or a tagged [`MoveRejection`]. Nothing mutates until
//! the caller commits the effect, so every rejection path trivially
//! leaves the session state untouched.

use crate::error::MoveRejection;
use crate::occupant::Occupant;
use crate::partition::PartitionPair;
use crate::room::{Room, SLOT_COUNT};

/// A request to relocate one occupant from one slot to another.
///
/// Ephemeral: produced by the interactive layer from a drag gesture,
/// consumed by [`resolve_move`], never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    /// Room the occupant is dragged out of.
    pub source_room: String,
    /// Slot index within the source room.
    pub source_slot: usize,
    /// Room the occupant is dropped into. May equal `source_room`.
    pub dest_room: String,
    /// Slot index the drop was registered on. Clamped to the two
    /// physical positions by the engine.
    pub dest_slot: usize,
}

impl MoveRequest {
    /// Creates a move request.
    pub fn new(
        source_room: impl Into<String>,
        source_slot: usize,
        dest_room: impl Into<String>,
        dest_slot: usize,
    ) -> Self {
        Self {
            source_room: source_room.into(),
            source_slot,
            dest_room: dest_room.into(),
            dest_slot,
        }
    }
}

/// The outcome of an accepted move: fresh snapshots of the affected
/// rooms, ready to be committed via
/// [`PartitionPair::commit`](crate::PartitionPair::commit).
#[derive(Clone, Debug, PartialEq)]
pub enum MoveEffect {
    /// A same-room reorder; only one room changed.
    Reordered { room: Room },
    /// A cross-room relocation (direct placement or swap).
    Relocated { source: Room, dest: Room },
}

impl MoveEffect {
    /// Ids of the rooms this effect touches.
    pub fn room_ids(&self) -> Vec<&str> {
        match self {
            MoveEffect::Reordered { room } => vec![room.id()],
            MoveEffect::Relocated { source, dest } => vec![source.id(), dest.id()],
        }
    }
}

/// Resolves a move request against the current partition state.
///
/// The contract, in order:
/// 1. both rooms must exist (`RoomNotFound`);
/// 2. their groups must match (`CrossGroupMove`) - occupants of
///    different groups are never mixed into one room;
/// 3. the source slot must hold an occupant (`IndexOutOfRange`,
///    `EmptySource`);
/// 4. a same-room request is a two-element reorder; a cross-room
///    request places into the targeted slot if empty, else into the
///    empty alternate slot if one exists, and only when the destination
///    is full swaps with the occupant of the targeted slot.
///
/// Room scores are never recomputed: both snapshots keep the scores the
/// rooms were seeded with.
///
/// # Examples
///
/// ```
/// use dormatch_core::{
///     resolve_move, CompatScore, Group, MoveEffect, MoveRequest, Occupant, Partition,
///     PartitionPair, Room,
/// };
///
/// let ana = Occupant::new("1", "Ana", Group::A, CompatScore::of(80));
/// let r1 = Room::new("A-Room-1", Group::A, [Some(ana), None], CompatScore::of(80)).unwrap();
/// let r2 = Room::new("A-Room-2", Group::A, [None, None], CompatScore::ZERO).unwrap();
/// let pair = PartitionPair::new(
///     Partition::new(Group::A, vec![r1, r2]).unwrap(),
///     Partition::empty(Group::B),
/// )
/// .unwrap();
///
/// let effect = resolve_move(&pair, &MoveRequest::new("A-Room-1", 0, "A-Room-2", 0)).unwrap();
/// match effect {
///     MoveEffect::Relocated { source, dest } => {
///         assert_eq!(source.occupant_count(), 0);
///         assert_eq!(dest.slot_at(0).unwrap().unwrap().id(), "1");
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn resolve_move(
    partitions: &PartitionPair,
    request: &MoveRequest,
) -> Result<MoveEffect, MoveRejection> {
    let source = partitions.find_room(&request.source_room)?;
    let dest = partitions.find_room(&request.dest_room)?;

    if source.group() != dest.group() {
        return Err(MoveRejection::CrossGroupMove {
            source: source.group(),
            dest: dest.group(),
        });
    }

    let dragged = source
        .slot_at(request.source_slot)?
        .cloned()
        .ok_or_else(|| MoveRejection::EmptySource {
            room_id: source.id().to_string(),
            slot: request.source_slot,
        })?;

    if request.source_room == request.dest_room {
        reorder(source, request.source_slot, request.dest_slot, dragged)
    } else {
        relocate(source, dest, request.source_slot, request.dest_slot, dragged)
    }
}

/// Same-room case: removal at `from` and reinsertion at `to` in a
/// two-element list. The room score is left untouched regardless of
/// which occupant ends up in which position.
fn reorder(
    room: &Room,
    from: usize,
    to: usize,
    dragged: Occupant,
) -> Result<MoveEffect, MoveRejection> {
    let to = to.min(SLOT_COUNT - 1);
    let mut room = room.clone();
    if from != to {
        let other = room.slot_at(SLOT_COUNT - 1 - from)?.cloned();
        room.set_slot(to, Some(dragged))?;
        room.set_slot(SLOT_COUNT - 1 - to, other)?;
    }
    Ok(MoveEffect::Reordered { room })
}

/// Cross-room case. The drop index is clamped to the two physical
/// positions; placement prefers an empty slot (targeted, then the
/// alternate) and swaps only when the destination room is full.
fn relocate(
    source: &Room,
    dest: &Room,
    source_slot: usize,
    dest_slot: usize,
    dragged: Occupant,
) -> Result<MoveEffect, MoveRejection> {
    let target = dest_slot.min(SLOT_COUNT - 1);
    let mut new_source = source.clone();
    let mut new_dest = dest.clone();

    if new_dest.slot_at(target)?.is_none() {
        new_dest.set_slot(target, Some(dragged))?;
        new_source.set_slot(source_slot, None)?;
    } else {
        let alternate = SLOT_COUNT - 1 - target;
        if new_dest.slot_at(alternate)?.is_none() {
            // Targeted slot taken but the room has space: take the free
            // slot instead of displacing the occupant under the cursor.
            new_dest.set_slot(alternate, Some(dragged))?;
            new_source.set_slot(source_slot, None)?;
        } else {
            // Destination full: swap with exactly the targeted slot.
            let displaced = new_dest.slot_at(target)?.cloned();
            new_dest.set_slot(target, Some(dragged))?;
            new_source.set_slot(source_slot, displaced)?;
        }
    }

    Ok(MoveEffect::Relocated {
        source: new_source,
        dest: new_dest,
    })
}
