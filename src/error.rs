//! Error types for team formation.
//!
//! One crate-wide error enum. The engine is a pure, synchronous
//! computation: every failure propagates to the caller unchanged —
//! nothing is retried, swallowed, or logged-and-continued.

use thiserror::Error;

/// Errors raised by the formation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormationError {
    /// Both input pools must be non-empty before any computation starts.
    #[error("Not enough users or teachers to create the teams")]
    EmptyPools,

    /// Fewer students than teams: every team needs at least one member.
    #[error("Not enough users to create the teams")]
    InsufficientStudents {
        /// Students available.
        available: usize,
        /// Teams requested.
        team_count: usize,
    },

    /// Fewer supervisors than teams: each team gets exactly one.
    #[error("Not enough teachers to create the teams")]
    InsufficientSupervisors {
        /// Supervisors available.
        available: usize,
        /// Teams requested.
        team_count: usize,
    },

    /// A team count of zero makes the distribution math meaningless.
    #[error("Team count must be greater than zero")]
    ZeroTeamCount,

    /// A student reached the merit sort without a historical grade.
    ///
    /// Absence is a data error, not a default-to-zero case; the whole
    /// formation halts and no partial assignment is surfaced.
    #[error("Student '{0}' has no historical grade")]
    MissingGrade(String),

    /// A full placement scan over all teams placed nothing.
    ///
    /// The quota inputs leave bachelors with no team that can accept
    /// them; repeating the scan would never make progress.
    #[error("No team can accept the remaining bachelor placements")]
    BachelorPlacementStalled,

    /// The girl-quota walk can no longer seat the remaining girls.
    ///
    /// The working quota has outgrown the current team's capacity, or
    /// the teams ahead cannot absorb what is left; raising the quota
    /// further would never help.
    #[error("No team can accept the remaining girl placements")]
    GirlPlacementStalled,

    /// A team's girl and bachelor slots add up to more than its size.
    ///
    /// Happens when `girls_per_team` packs more girls into a team than
    /// it has slots; the remainder fill would otherwise go negative.
    #[error("Per-team slot counts exceed the team size")]
    SlotsExceedTeamSize,
}

/// Result type alias for formation operations.
pub type Result<T> = std::result::Result<T, FormationError>;
