//! Materializes the initial partitions from a roster configuration.
//!
//! The roster's occupant order is the pairing the external matching
//! computation produced: entries are taken two at a time into rooms
//! `"{group}-Room-1"`, `"{group}-Room-2"`, ... . Room scores come from
//! the roster when given, otherwise from the floor mean of each room's
//! seeded occupants; after this point nothing recomputes them.

use thiserror::Error;

use dormatch_config::{ConfigError, GroupRoster, RosterConfig};
use dormatch_core::{CompatScore, DomainError, Group, Occupant, Partition, PartitionPair, Room};

/// Errors raised while turning a roster into partitions.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The roster failed validation or parsing.
    #[error("roster error: {0}")]
    Config(#[from] ConfigError),

    /// The roster produced a structurally inconsistent assignment.
    #[error("seeded assignment is inconsistent: {0}")]
    Domain(#[from] DomainError),
}

/// Builds the session's partition pair from a validated roster.
///
/// Groups absent from the roster seed empty partitions, so a
/// single-group roster is fine.
///
/// # Errors
///
/// Fails if the roster is invalid ([`SeedError::Config`]) or encodes a
/// duplicate or cross-group placement ([`SeedError::Domain`]).
pub fn materialize(config: &RosterConfig) -> Result<PartitionPair, SeedError> {
    config.validate()?;
    let a = build_partition(Group::A, config.roster(Group::A))?;
    let b = build_partition(Group::B, config.roster(Group::B))?;
    Ok(PartitionPair::new(a, b)?)
}

fn build_partition(
    group: Group,
    roster: Option<&GroupRoster>,
) -> Result<Partition, SeedError> {
    let Some(roster) = roster else {
        return Ok(Partition::empty(group));
    };

    let mut occupants = roster.occupants.iter().map(|entry| {
        Occupant::new(
            entry.id.clone(),
            entry.name.clone(),
            group,
            CompatScore::of(entry.score),
        )
    });

    let mut rooms = Vec::with_capacity(roster.room_count);
    for number in 1..=roster.room_count {
        let slots = [occupants.next(), occupants.next()];
        let score = match &roster.room_scores {
            Some(scores) => CompatScore::of(scores[number - 1]),
            None => {
                let seeded: Vec<_> = slots.iter().flatten().map(|o| o.score()).collect();
                CompatScore::floor_mean(&seeded)
            }
        };
        rooms.push(Room::new(
            format!("{group}-Room-{number}"),
            group,
            slots,
            score,
        )?);
    }

    Ok(Partition::new(group, rooms)?)
}
