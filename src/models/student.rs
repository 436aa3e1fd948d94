//! Student model.
//!
//! A student is a read-only input to the formation pipeline: the engine
//! never mutates one beyond placing it into a team roster.

use serde::{Deserialize, Serialize};

/// Gender category of a student.
///
/// The source domain is binary; the girl-quota distribution counts
/// `Female` students against `girls_per_team`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Female student (counts toward the per-team girl quota).
    Female,
    /// Male student.
    Male,
}

/// A student to be placed into a team.
///
/// `grade` is the historical grade used for merit ordering and roster
/// balancing. It is optional at the data-model level because upstream
/// directories may not carry it, but the partitioner treats a missing
/// grade as a hard error — never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier (e.g., an email or directory id).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Gender category.
    pub gender: Gender,
    /// Whether the student already holds a prior undergraduate-equivalent
    /// qualification ("bachelor"), subject to a per-team quota.
    pub bachelor: bool,
    /// Historical grade. `None` = unknown, rejected by the partitioner.
    pub grade: Option<f64>,
}

impl Student {
    /// Creates a new student with the given ID and gender.
    pub fn new(id: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            gender,
            bachelor: false,
            grade: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the student as a bachelor (prior-degree holder).
    pub fn with_bachelor(mut self, bachelor: bool) -> Self {
        self.bachelor = bachelor;
        self
    }

    /// Sets the historical grade.
    pub fn with_grade(mut self, grade: f64) -> Self {
        self.grade = Some(grade);
        self
    }

    /// Whether the student is female.
    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_builder() {
        let s = Student::new("alice@example.org", Gender::Female)
            .with_name("Alice")
            .with_bachelor(true)
            .with_grade(14.5);

        assert_eq!(s.id, "alice@example.org");
        assert_eq!(s.name, "Alice");
        assert!(s.is_female());
        assert!(s.bachelor);
        assert_eq!(s.grade, Some(14.5));
    }

    #[test]
    fn test_student_defaults() {
        let s = Student::new("bob", Gender::Male);
        assert!(!s.is_female());
        assert!(!s.bachelor);
        assert_eq!(s.grade, None);
    }

    #[test]
    fn test_student_from_json() {
        // Shape produced by the user-directory export.
        let json = r#"{
            "id": "carol",
            "name": "Carol",
            "gender": "female",
            "bachelor": false,
            "grade": 12.0
        }"#;
        let s: Student = serde_json::from_str(json).unwrap();
        assert_eq!(s.gender, Gender::Female);
        assert_eq!(s.grade, Some(12.0));
    }
}
