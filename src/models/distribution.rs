//! Slot-distribution vectors.
//!
//! Intermediate representation between the distributor and the
//! assigner: one integer per team per category, held in named fields
//! rather than a string-keyed map.

use serde::{Deserialize, Serialize};

/// Per-team slot counts for the four strata plus the total team sizes.
///
/// Invariant: for every team index `i`,
/// `bachelor_girls[i] + non_bachelor_girls[i] + bachelor_boys[i]
/// + non_bachelor_boys[i] == team_sizes[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDistribution {
    /// Bachelor-girl slots per team.
    pub bachelor_girls: Vec<usize>,
    /// Non-bachelor-girl slots per team.
    pub non_bachelor_girls: Vec<usize>,
    /// Bachelor-boy slots per team.
    pub bachelor_boys: Vec<usize>,
    /// Non-bachelor-boy slots per team.
    pub non_bachelor_boys: Vec<usize>,
    /// Total slots per team.
    pub team_sizes: Vec<usize>,
}

impl SlotDistribution {
    /// Number of teams.
    pub fn team_count(&self) -> usize {
        self.team_sizes.len()
    }

    /// Whether the four category vectors sum to the team sizes at
    /// every index.
    pub fn is_consistent(&self) -> bool {
        (0..self.team_sizes.len()).all(|i| {
            self.bachelor_girls[i]
                + self.non_bachelor_girls[i]
                + self.bachelor_boys[i]
                + self.non_bachelor_boys[i]
                == self.team_sizes[i]
        })
    }
}
