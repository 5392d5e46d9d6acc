//! Occupants and the group attribute that partitions them.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The attribute that partitions rooms and occupants into two disjoint sets.
///
/// In the dormitory deployment this is gender, but the engine only cares
/// that there are exactly two values and that a move never crosses them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Group {
    A,
    B,
}

impl Group {
    /// Returns the opposite group value.
    #[inline]
    pub const fn other(self) -> Group {
        match self {
            Group::A => Group::B,
            Group::B => Group::A,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::A => write!(f, "A"),
            Group::B => write!(f, "B"),
        }
    }
}

/// A compatibility score produced by the external matching computation.
///
/// Scores are attached to occupants and rooms when the assignment is
/// seeded and are never recomputed afterwards: a manual reassignment
/// keeps every score exactly as it was. This keeps the figures an
/// operator saw before editing stable while they edit.
///
/// # Examples
///
/// ```
/// use dormatch_core::CompatScore;
///
/// let score = CompatScore::of(72);
/// assert_eq!(score.value(), 72);
/// assert!(score > CompatScore::ZERO);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct CompatScore(i64);

impl CompatScore {
    /// The zero score.
    pub const ZERO: CompatScore = CompatScore(0);

    /// Creates a score with the given value.
    #[inline]
    pub const fn of(value: i64) -> Self {
        CompatScore(value)
    }

    /// Returns the raw score value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Floor of the mean of the given scores; zero for an empty slice.
    ///
    /// Used once, when a room is materialized from a roster that carries
    /// no explicit room score. Nothing recomputes scores after seeding.
    pub fn floor_mean(scores: &[CompatScore]) -> CompatScore {
        if scores.is_empty() {
            return CompatScore::ZERO;
        }
        let sum: i64 = scores.iter().map(|s| s.0).sum();
        CompatScore(sum.div_euclid(scores.len() as i64))
    }
}

impl fmt::Display for CompatScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person eligible for placement into a room slot.
///
/// Occupants are immutable once created; only their slot location changes
/// over a session. Equality and hashing use the id alone - two occupants
/// are the same person iff their ids match.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Occupant {
    id: String,
    name: String,
    group: Group,
    score: CompatScore,
}

impl Occupant {
    /// Creates a new occupant.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        group: Group,
        score: CompatScore,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group,
            score,
        }
    }

    /// Unique id within a partition.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group this occupant belongs to.
    #[inline]
    pub fn group(&self) -> Group {
        self.group
    }

    /// Individual compatibility score from the matching survey.
    #[inline]
    pub fn score(&self) -> CompatScore {
        self.score
    }
}

impl PartialEq for Occupant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Occupant {}

impl Hash for Occupant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
