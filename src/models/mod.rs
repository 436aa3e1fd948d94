//! Formation domain models.
//!
//! Core data types for one team-formation run: the students being
//! placed, the criteria governing the run, the intermediate slot
//! distribution, and the resulting teams.

mod criteria;
mod distribution;
mod student;
mod team;

pub use criteria::FormationCriteria;
pub use distribution::SlotDistribution;
pub use student::{Gender, Student};
pub use team::{Supervisor, Team};
