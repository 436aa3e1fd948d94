//! Formation criteria.
//!
//! Caller-supplied and derived parameters governing one formation run.

use serde::{Deserialize, Serialize};

/// Parameters of a single team-formation run.
///
/// `team_count` and `girls_per_team` come from the caller.
/// `bachelor_quota` and `balance_tolerance` are write-once outputs,
/// computed during the run and fully populated before the criteria are
/// handed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationCriteria {
    /// Number of teams to form (> 0).
    pub team_count: usize,
    /// Target number of girls per team (≥ 0).
    pub girls_per_team: usize,
    /// Derived: `ceil(total_bachelors / team_count)`.
    pub bachelor_quota: usize,
    /// Derived: the converged grade-average spread, rounded to 2 decimals.
    pub balance_tolerance: f64,
}

impl FormationCriteria {
    /// Creates criteria from the caller-supplied scalars.
    ///
    /// Derived fields start at zero and are filled in by the pipeline.
    pub fn new(team_count: usize, girls_per_team: usize) -> Self {
        Self {
            team_count,
            girls_per_team,
            bachelor_quota: 0,
            balance_tolerance: 0.0,
        }
    }
}
