//! Roster assignment.
//!
//! Consumes the four merit-sorted strata according to the per-team
//! slot counts, producing concrete rosters. Students are always taken
//! from the front of a stratum — lowest remaining merit first — so a
//! roster mixes the strata in processing order, each run internally
//! ascending by grade.

use std::collections::VecDeque;

use crate::formation::partition::Strata;
use crate::models::{SlotDistribution, Student};

/// Fills `team_count` rosters from the strata.
///
/// Strata are consumed in fixed order: bachelor girls, bachelor boys,
/// non-bachelor girls, non-bachelor boys. For each stratum, team `i`
/// is filled to its quota before team `i+1` receives anyone.
///
/// Postconditions: every input student appears in exactly one roster,
/// and `rosters[i].len() == distribution.team_sizes[i]`.
pub fn assign_to_teams(distribution: &SlotDistribution, strata: Strata) -> Vec<Vec<Student>> {
    let mut rosters: Vec<Vec<Student>> = vec![Vec::new(); distribution.team_count()];

    fill_from_stratum(&mut rosters, strata.female_bachelor, &distribution.bachelor_girls);
    fill_from_stratum(&mut rosters, strata.male_bachelor, &distribution.bachelor_boys);
    fill_from_stratum(
        &mut rosters,
        strata.female_non_bachelor,
        &distribution.non_bachelor_girls,
    );
    fill_from_stratum(
        &mut rosters,
        strata.male_non_bachelor,
        &distribution.non_bachelor_boys,
    );

    rosters
}

/// Moves students from the front of one stratum into the rosters,
/// honouring the per-team quota vector.
fn fill_from_stratum(rosters: &mut [Vec<Student>], stratum: Vec<Student>, quotas: &[usize]) {
    let mut remaining: VecDeque<Student> = stratum.into();
    for (roster, &quota) in rosters.iter_mut().zip(quotas) {
        for _ in 0..quota {
            match remaining.pop_front() {
                Some(student) => roster.push(student),
                None => return,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, SlotDistribution};

    fn student(id: &str, gender: Gender, bachelor: bool, grade: f64) -> Student {
        Student::new(id, gender)
            .with_bachelor(bachelor)
            .with_grade(grade)
    }

    fn strata_of(
        female_bachelor: Vec<Student>,
        male_bachelor: Vec<Student>,
        female_non_bachelor: Vec<Student>,
        male_non_bachelor: Vec<Student>,
    ) -> Strata {
        Strata {
            female_bachelor,
            male_bachelor,
            female_non_bachelor,
            male_non_bachelor,
        }
    }

    #[test]
    fn test_assignment_respects_team_sizes() {
        let strata = strata_of(
            vec![student("fb1", Gender::Female, true, 10.0)],
            vec![student("mb1", Gender::Male, true, 11.0)],
            vec![
                student("fn1", Gender::Female, false, 9.0),
                student("fn2", Gender::Female, false, 12.0),
            ],
            vec![
                student("mn1", Gender::Male, false, 8.0),
                student("mn2", Gender::Male, false, 13.0),
            ],
        );
        let distribution = SlotDistribution {
            bachelor_girls: vec![1, 0],
            non_bachelor_girls: vec![0, 2],
            bachelor_boys: vec![0, 1],
            non_bachelor_boys: vec![2, 0],
            team_sizes: vec![3, 3],
        };

        let rosters = assign_to_teams(&distribution, strata);
        assert_eq!(rosters.len(), 2);
        assert_eq!(rosters[0].len(), 3);
        assert_eq!(rosters[1].len(), 3);

        let team0: Vec<&str> = rosters[0].iter().map(|s| s.id.as_str()).collect();
        let team1: Vec<&str> = rosters[1].iter().map(|s| s.id.as_str()).collect();
        // Strata are consumed in fixed order, front (lowest merit) first.
        assert_eq!(team0, vec!["fb1", "mn1", "mn2"]);
        assert_eq!(team1, vec!["mb1", "fn1", "fn2"]);
    }

    #[test]
    fn test_every_student_placed_once() {
        let strata = strata_of(
            Vec::new(),
            Vec::new(),
            vec![
                student("f1", Gender::Female, false, 10.0),
                student("f2", Gender::Female, false, 11.0),
            ],
            vec![
                student("m1", Gender::Male, false, 9.0),
                student("m2", Gender::Male, false, 12.0),
            ],
        );
        let distribution = SlotDistribution {
            bachelor_girls: vec![0, 0],
            non_bachelor_girls: vec![1, 1],
            bachelor_boys: vec![0, 0],
            non_bachelor_boys: vec![1, 1],
            team_sizes: vec![2, 2],
        };

        let rosters = assign_to_teams(&distribution, strata);
        let mut ids: Vec<&str> = rosters
            .iter()
            .flatten()
            .map(|s| s.id.as_str())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["f1", "f2", "m1", "m2"]);
    }

    #[test]
    fn test_front_of_stratum_goes_to_first_team() {
        // Lowest-merit students are consumed first, so team 0 gets the
        // weaker half of the stratum.
        let strata = strata_of(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            vec![
                student("low", Gender::Male, false, 5.0),
                student("mid", Gender::Male, false, 10.0),
                student("high", Gender::Male, false, 15.0),
            ],
        );
        let distribution = SlotDistribution {
            bachelor_girls: vec![0, 0],
            non_bachelor_girls: vec![0, 0],
            bachelor_boys: vec![0, 0],
            non_bachelor_boys: vec![2, 1],
            team_sizes: vec![2, 1],
        };

        let rosters = assign_to_teams(&distribution, strata);
        assert_eq!(rosters[0][0].id, "low");
        assert_eq!(rosters[0][1].id, "mid");
        assert_eq!(rosters[1][0].id, "high");
    }
}
