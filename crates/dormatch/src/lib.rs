//! Dormatch - manual rebalancing of two-person room assignments.
//!
//! An external matching computation proposes who shares which room;
//! dormatch lets an operator drag occupants between rooms afterwards
//! under hard rules: rooms hold exactly two slots, groups never mix,
//! nobody is duplicated or lost, and scores stay exactly as seeded.
//!
//! # Example
//!
//! ```rust
//! use dormatch::prelude::*;
//!
//! let mut session = SessionController::new(mock_partitions(2, 42));
//! session
//!     .request_move(MoveRequest::new("A-Room-1", 0, "A-Room-2", 0))
//!     .unwrap();
//!
//! let rooms = session.finalize();
//! assert_eq!(rooms.len(), 4);
//! ```

// Domain model and engine
pub use dormatch_core::{
    resolve_move, CompatScore, DomainError, Group, MoveEffect, MoveRejection, MoveRequest,
    Occupant, Partition, PartitionPair, Room, SLOT_COUNT,
};

// Roster configuration
pub use dormatch_config::{ConfigError, GroupRoster, OccupantEntry, RosterConfig};

// Session surface
pub use dormatch_session::{
    seed, telemetry, RoomExport, SeedError, SessionController, SessionError, SessionEvent,
    SessionManager,
};
pub use dormatch_session::fixture::mock_partitions;

/// Everything a session host typically needs.
pub mod prelude {
    pub use dormatch_core::{
        CompatScore, Group, MoveEffect, MoveRejection, MoveRequest, Occupant, Partition,
        PartitionPair, Room,
    };

    pub use dormatch_config::RosterConfig;

    pub use dormatch_session::fixture::mock_partitions;
    pub use dormatch_session::{
        RoomExport, SessionController, SessionError, SessionEvent, SessionManager,
    };
}
