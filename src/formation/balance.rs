//! Roster balancing.
//!
//! Iteratively swaps single students between the lowest- and
//! highest-average rosters until the spread of team grade averages
//! falls under an adaptive tolerance.
//!
//! # Algorithm
//!
//! 1. Compute each roster's mean historical grade.
//! 2. While `max(average) - min(average) > threshold` (initially 0.1):
//!    swap the highest-grade student of the highest-average roster with
//!    the lowest-grade student of the lowest-average roster, then
//!    recompute only those two averages.
//! 3. Every 1000 iterations without convergence, relax the threshold
//!    by 0.05 and reset the counter.
//!
//! Termination is guaranteed: the threshold strictly grows while the
//! spread stays bounded by the grade range, so non-convergence is
//! self-correcting and never an error. Swapping into or out of a
//! single-member roster is legal and gets no special case.

use crate::models::{FormationCriteria, Student};

/// Balances rosters in place and records the achieved tolerance.
///
/// The final threshold, rounded to 2 decimals, is stored into
/// `criteria.balance_tolerance`; on return the spread of roster
/// averages is at most that value.
///
/// Rosters must be non-empty (the pipeline guarantees at least one
/// student per team).
pub fn balance_teams(rosters: &mut [Vec<Student>], criteria: &mut FormationCriteria) {
    let mut averages: Vec<f64> = rosters.iter().map(|r| roster_average(r)).collect();

    let mut threshold = 0.1;
    let mut iterations = 0u32;

    while spread(&averages) > threshold {
        iterations += 1;
        let lo = index_of_min(&averages);
        let hi = index_of_max(&averages);

        swap_extremes(rosters, hi, lo);

        averages[lo] = roster_average(&rosters[lo]);
        averages[hi] = roster_average(&rosters[hi]);

        if iterations > 1000 {
            threshold += 0.05;
            iterations = 0;
            tracing::trace!(threshold, "relaxed balance threshold");
        }
    }

    criteria.balance_tolerance = (threshold * 100.0).round() / 100.0;
    tracing::debug!(
        tolerance = criteria.balance_tolerance,
        "rosters balanced"
    );
}

/// Mean historical grade of one roster.
fn roster_average(roster: &[Student]) -> f64 {
    let total: f64 = roster.iter().filter_map(|s| s.grade).sum();
    total / roster.len() as f64
}

/// Max-min spread over the roster averages.
fn spread(averages: &[f64]) -> f64 {
    let mut min = averages[0];
    let mut max = averages[0];
    for &avg in averages {
        if avg < min {
            min = avg;
        }
        if avg > max {
            max = avg;
        }
    }
    max - min
}

/// First index holding the minimum average.
fn index_of_min(averages: &[f64]) -> usize {
    let mut idx = 0;
    for i in 1..averages.len() {
        if averages[i] < averages[idx] {
            idx = i;
        }
    }
    idx
}

/// First index holding the maximum average.
fn index_of_max(averages: &[f64]) -> usize {
    let mut idx = 0;
    for i in 1..averages.len() {
        if averages[i] > averages[idx] {
            idx = i;
        }
    }
    idx
}

/// Swaps the strongest student of roster `hi` with the weakest of
/// roster `lo`. Ties break on the first one found; the swapped
/// students are appended at the tail of their new roster.
fn swap_extremes(rosters: &mut [Vec<Student>], hi: usize, lo: usize) {
    let strongest = index_of_extreme_grade(&rosters[hi], |candidate, best| candidate > best);
    let weakest = index_of_extreme_grade(&rosters[lo], |candidate, best| candidate < best);

    let strong = rosters[hi].remove(strongest);
    let weak = rosters[lo].remove(weakest);
    rosters[lo].push(strong);
    rosters[hi].push(weak);
}

/// First index whose grade beats every earlier one under `better`.
fn index_of_extreme_grade(roster: &[Student], better: impl Fn(f64, f64) -> bool) -> usize {
    let mut idx = 0;
    let mut best = roster[0].grade.unwrap_or_default();
    for (i, student) in roster.iter().enumerate().skip(1) {
        let grade = student.grade.unwrap_or_default();
        if better(grade, best) {
            best = grade;
            idx = i;
        }
    }
    idx
}
