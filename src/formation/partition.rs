//! Student pool partitioning.
//!
//! Splits the input pool into four strata by gender × bachelor status
//! and sorts each stratum ascending by historical grade ("merit
//! order"). The sort is stable: equal-grade students keep their
//! relative input order, which is what makes the whole pipeline
//! deterministic.

use crate::error::{FormationError, Result};
use crate::models::{Gender, Student};

/// The four gender × bachelor-status partitions of the student pool,
/// each in ascending merit order.
#[derive(Debug, Clone, PartialEq)]
pub struct Strata {
    /// Female students holding a prior degree.
    pub female_bachelor: Vec<Student>,
    /// Male students holding a prior degree.
    pub male_bachelor: Vec<Student>,
    /// Female students without a prior degree.
    pub female_non_bachelor: Vec<Student>,
    /// Male students without a prior degree.
    pub male_non_bachelor: Vec<Student>,
}

impl Strata {
    /// Total number of female students.
    pub fn girl_count(&self) -> usize {
        self.female_bachelor.len() + self.female_non_bachelor.len()
    }

    /// Total number of prior-degree holders.
    pub fn bachelor_count(&self) -> usize {
        self.female_bachelor.len() + self.male_bachelor.len()
    }

    /// Total number of students across all four strata.
    pub fn student_count(&self) -> usize {
        self.female_bachelor.len()
            + self.male_bachelor.len()
            + self.female_non_bachelor.len()
            + self.male_non_bachelor.len()
    }
}

/// Partitions students into the four strata and merit-sorts each one.
///
/// Fails with [`FormationError::MissingGrade`] if any student has no
/// historical grade. The check runs over the whole pool before any
/// sorting happens, so a failure performs no partial work.
pub fn partition_students(students: Vec<Student>) -> Result<Strata> {
    if let Some(ungraded) = students.iter().find(|s| s.grade.is_none()) {
        return Err(FormationError::MissingGrade(ungraded.id.clone()));
    }

    let mut strata = Strata {
        female_bachelor: Vec::new(),
        male_bachelor: Vec::new(),
        female_non_bachelor: Vec::new(),
        male_non_bachelor: Vec::new(),
    };

    for student in students {
        match (student.gender, student.bachelor) {
            (Gender::Female, true) => strata.female_bachelor.push(student),
            (Gender::Male, true) => strata.male_bachelor.push(student),
            (Gender::Female, false) => strata.female_non_bachelor.push(student),
            (Gender::Male, false) => strata.male_non_bachelor.push(student),
        }
    }

    sort_by_merit(&mut strata.female_bachelor);
    sort_by_merit(&mut strata.male_bachelor);
    sort_by_merit(&mut strata.female_non_bachelor);
    sort_by_merit(&mut strata.male_non_bachelor);

    Ok(strata)
}

/// Stable ascending sort by historical grade.
///
/// Callers have already rejected missing grades; `total_cmp` keeps the
/// ordering total even for pathological float inputs.
fn sort_by_merit(students: &mut [Student]) {
    students.sort_by(|a, b| {
        a.grade
            .unwrap_or(f64::NEG_INFINITY)
            .total_cmp(&b.grade.unwrap_or(f64::NEG_INFINITY))
    });
}
