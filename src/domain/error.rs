//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated,
//! usually because a collaborator handed us data that breaks its contract.
//!
//! # Examples
//!
//! ```
//! use gridiron::domain::error::DomainError;
//! use gridiron::domain::{RawWeekScore, RosterId};
//!
//! let raw = RawWeekScore {
//!     roster_id: RosterId::new(4),
//!     matchup_id: Some(2),
//!     points: None,
//!     custom_points: None,
//! };
//!
//! let result = raw.into_score(3);
//! assert!(matches!(result, Err(DomainError::MissingPoints { week: 3, .. })));
//! ```

use thiserror::Error;

use super::ids::RosterId;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A weekly score record carried neither `points` nor `custom_points`.
    #[error("week {week} roster {roster_id} has neither points nor custom_points")]
    MissingPoints {
        /// Week the record belongs to.
        week: u32,
        /// Roster the record belongs to.
        roster_id: RosterId,
    },

    /// Season settings break their ordering invariant.
    #[error("invalid season settings: {reason}")]
    InvalidSeasonSettings {
        /// Human readable description of the violated rule.
        reason: String,
    },

    /// An extraction operation name that is not part of the fixed set.
    #[error("unknown extraction operation '{name}'")]
    InvalidOperation {
        /// The name that failed to parse.
        name: String,
    },
}
