//! The session controller: exclusive owner of both partitions.
//!
//! Move requests are discrete user events, applied strictly in the
//! order they arrive and each processed to completion before the next.
//! There is no blocking I/O on this path; the persistence hand-off
//! happens only at finalize, in [`crate::manager`].
//!
//! Logging levels:
//! - **INFO**: session lifecycle (seeded, finalized, cancelled)
//! - **DEBUG**: individual moves, accepted and rejected

use tracing::{debug, info};

use dormatch_config::RosterConfig;
use dormatch_core::{resolve_move, MoveEffect, MoveRejection, MoveRequest, PartitionPair};

use crate::export::{export_pair, RoomExport};
use crate::seed::{self, SeedError};

/// Holds the two partitions in memory for the lifetime of an editing
/// session, applies engine results, and exports on completion.
///
/// The controller is the only component that mutates partitions, and it
/// does so exclusively through [`PartitionPair::commit`] with effects
/// produced by the engine, so the conservation invariant hangs on a
/// single reviewable call path.
#[derive(Debug)]
pub struct SessionController {
    partitions: PartitionPair,
    applied_moves: u64,
}

impl SessionController {
    /// Starts a session over an already materialized assignment.
    pub fn new(partitions: PartitionPair) -> Self {
        info!(
            occupants = partitions.occupant_ids().len(),
            "editing session started"
        );
        Self {
            partitions,
            applied_moves: 0,
        }
    }

    /// Seeds a session straight from a roster configuration.
    pub fn seeded(config: &RosterConfig) -> Result<Self, SeedError> {
        Ok(Self::new(seed::materialize(config)?))
    }

    /// Resolves one move request and commits it on acceptance.
    ///
    /// On any rejection no mutation happens and the tagged reason is
    /// returned for the interactive layer to surface (typically by
    /// restoring the dragged element).
    pub fn request_move(&mut self, request: MoveRequest) -> Result<MoveEffect, MoveRejection> {
        match resolve_move(&self.partitions, &request) {
            Ok(effect) => {
                self.partitions.commit(effect.clone())?;
                self.applied_moves += 1;
                debug!(
                    source = %request.source_room,
                    dest = %request.dest_room,
                    rooms = ?effect.room_ids(),
                    "move applied"
                );
                Ok(effect)
            }
            Err(rejection) => {
                debug!(
                    source = %request.source_room,
                    dest = %request.dest_room,
                    %rejection,
                    "move rejected"
                );
                Err(rejection)
            }
        }
    }

    /// Read-only view of the current assignment.
    pub fn partitions(&self) -> &PartitionPair {
        &self.partitions
    }

    /// Number of accepted moves so far.
    pub fn applied_moves(&self) -> u64 {
        self.applied_moves
    }

    /// Ends the session, returning the full ordered export view.
    pub fn finalize(self) -> Vec<RoomExport> {
        let rooms = export_pair(&self.partitions);
        info!(
            rooms = rooms.len(),
            moves = self.applied_moves,
            "session finalized"
        );
        rooms
    }

    /// Discards all in-memory edits. Re-editing requires re-seeding
    /// from the original external assignment.
    pub fn cancel(self) {
        info!(moves = self.applied_moves, "session cancelled, edits discarded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::mock_partitions;
    use dormatch_core::Group;

    #[test]
    fn accepted_move_is_committed_and_counted() {
        let mut session = SessionController::new(mock_partitions(2, 1));
        assert_eq!(session.applied_moves(), 0);

        session
            .request_move(MoveRequest::new("A-Room-1", 0, "A-Room-2", 0))
            .unwrap();
        assert_eq!(session.applied_moves(), 1);

        // The fixture is deterministic: A-Room-1 = [20240001, 20240002],
        // A-Room-2 = [20240003, 20240004]. A full destination swaps.
        let pair = session.partitions();
        assert_eq!(
            pair.find_room("A-Room-1").unwrap().occupant_ids(),
            vec!["20240003", "20240002"]
        );
        assert_eq!(
            pair.find_room("A-Room-2").unwrap().occupant_ids(),
            vec!["20240001", "20240004"]
        );
    }

    #[test]
    fn rejected_move_changes_nothing() {
        let mut session = SessionController::new(mock_partitions(1, 1));
        let before = session.partitions().occupant_ids();

        let rejection = session
            .request_move(MoveRequest::new("A-Room-1", 0, "B-Room-1", 0))
            .unwrap_err();
        assert!(matches!(rejection, MoveRejection::CrossGroupMove { .. }));
        assert_eq!(session.applied_moves(), 0);
        assert_eq!(session.partitions().occupant_ids(), before);
    }

    #[test]
    fn finalize_exports_all_rooms_in_order() {
        let session = SessionController::new(mock_partitions(3, 2));
        let rooms = session.finalize();
        assert_eq!(rooms.len(), 6);
        let ids: Vec<_> = rooms.iter().map(|r| r.room_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "A-Room-1", "A-Room-2", "A-Room-3", "B-Room-1", "B-Room-2", "B-Room-3"
            ]
        );
    }

    #[test]
    fn moves_survive_into_the_export() {
        let mut session = SessionController::new(mock_partitions(2, 3));
        let dragged = session
            .partitions()
            .find_room("A-Room-1")
            .unwrap()
            .slot_at(0)
            .unwrap()
            .unwrap()
            .id()
            .to_string();

        session
            .request_move(MoveRequest::new("A-Room-1", 0, "A-Room-2", 1))
            .unwrap();
        let rooms = session.finalize();
        let a2 = rooms.iter().find(|r| r.room_id == "A-Room-2").unwrap();
        assert!(a2.occupant_ids.contains(&dragged));
    }

    #[test]
    fn seeded_session_matches_roster() {
        let config = dormatch_config::RosterConfig::from_toml_str(
            r#"
[[groups]]
group = "B"
room_count = 1

[[groups.occupants]]
id = "1"
name = "Dee"
score = 5
"#,
        )
        .unwrap();
        let session = SessionController::seeded(&config).unwrap();
        assert_eq!(session.partitions().partition(Group::B).rooms().len(), 1);
        session.cancel();
    }
}
