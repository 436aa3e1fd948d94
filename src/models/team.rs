//! Team and supervisor models.
//!
//! During the core's execution a team is just a roster — an ordered
//! collection of students with no identity beyond its position in the
//! output list. Durable identity is assigned by a persistence
//! collaborator after the handoff.

use serde::{Deserialize, Serialize};

use super::Student;

/// A teacher supervising one team.
///
/// Supervisors are attached to output teams strictly by list order,
/// one per team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supervisor {
    /// Unique supervisor identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

impl Supervisor {
    /// Creates a new supervisor with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// A formed team: display name, member roster, and supervisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Display name. Falls back to `"Team {i+1}"` when the caller's
    /// name list is shorter than the team count.
    pub name: String,
    /// Member roster, in assignment order.
    pub members: Vec<Student>,
    /// Supervising teacher, attached by list order.
    pub supervisor: Option<Supervisor>,
}

impl Team {
    /// Creates a named team with the given roster.
    pub fn new(name: impl Into<String>, members: Vec<Student>) -> Self {
        Self {
            name: name.into(),
            members,
            supervisor: None,
        }
    }

    /// Attaches the supervising teacher.
    pub fn with_supervisor(mut self, supervisor: Supervisor) -> Self {
        self.supervisor = Some(supervisor);
        self
    }

    /// Number of members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Mean historical grade of the roster.
    ///
    /// A single-member roster degenerates to that member's own grade.
    /// Missing grades were rejected upstream; they count as zero here
    /// only to keep the accessor total.
    pub fn average_grade(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        let total: f64 = self.members.iter().filter_map(|s| s.grade).sum();
        total / self.members.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    #[test]
    fn test_team_average() {
        let team = Team::new(
            "Team 1",
            vec![
                Student::new("a", Gender::Female).with_grade(10.0),
                Student::new("b", Gender::Male).with_grade(14.0),
            ],
        );
        assert_eq!(team.size(), 2);
        assert!((team.average_grade() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_member_average() {
        let team = Team::new("solo", vec![Student::new("a", Gender::Male).with_grade(11.0)]);
        assert!((team.average_grade() - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_supervisor_attachment() {
        let team = Team::new("Team 1", Vec::new())
            .with_supervisor(Supervisor::new("t1").with_name("Dr. Who"));
        assert_eq!(team.supervisor.unwrap().name, "Dr. Who");
    }
}
