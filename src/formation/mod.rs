//! The team-formation pipeline.
//!
//! Four stages, each consuming the previous one's output:
//!
//! 1. [`partition`]: split the pool into four gender × bachelor strata,
//!    merit-sorted.
//! 2. [`distribution`]: compute per-team slot counts for every stratum.
//! 3. [`assignment`]: fill concrete rosters from the strata.
//! 4. [`balance`]: swap students between extreme rosters until the
//!    grade-average spread converges.
//!
//! [`form_teams`] runs the whole pipeline from a [`FormationRequest`]
//! and hands back finished [`Team`] values plus the finalized
//! [`FormationCriteria`] — `bachelor_quota` and `balance_tolerance` are
//! fully computed before the handoff.

pub mod assignment;
pub mod balance;
pub mod distribution;
pub mod partition;

pub use assignment::assign_to_teams;
pub use balance::balance_teams;
pub use distribution::{distribute_bachelors, distribute_equitably, distribute_girls};
pub use partition::{partition_students, Strata};

use crate::error::Result;
use crate::models::{FormationCriteria, SlotDistribution, Student, Supervisor, Team};
use crate::validation::validate_pools;

/// Input container for one formation run.
#[derive(Debug, Clone)]
pub struct FormationRequest {
    /// Students to place into teams.
    pub students: Vec<Student>,
    /// Supervising teachers, one per team, attached by list order.
    pub supervisors: Vec<Supervisor>,
    /// Number of teams to form.
    pub team_count: usize,
    /// Target number of girls per team.
    pub girls_per_team: usize,
    /// Optional display names; teams beyond the list fall back to
    /// `"Team {i+1}"`.
    pub team_names: Vec<String>,
}

impl FormationRequest {
    /// Creates a request from the caller-supplied inputs.
    pub fn new(
        students: Vec<Student>,
        supervisors: Vec<Supervisor>,
        team_count: usize,
        girls_per_team: usize,
    ) -> Self {
        Self {
            students,
            supervisors,
            team_count,
            girls_per_team,
            team_names: Vec::new(),
        }
    }

    /// Sets the display names for the formed teams.
    pub fn with_team_names(mut self, names: Vec<String>) -> Self {
        self.team_names = names;
        self
    }
}

/// Output of one formation run.
#[derive(Debug, Clone, PartialEq)]
pub struct FormationOutcome {
    /// The formed teams, balanced and named, supervisors attached.
    pub teams: Vec<Team>,
    /// The finalized criteria, derived fields populated.
    pub criteria: FormationCriteria,
}

/// Runs the full pipeline: validate, partition, distribute, assign,
/// balance, format.
///
/// Pure and synchronous; any failure halts the run before a single
/// team is surfaced. The result is deterministic for a given input.
pub fn form_teams(request: FormationRequest) -> Result<FormationOutcome> {
    validate_pools(&request.students, &request.supervisors, request.team_count)?;

    let mut criteria = FormationCriteria::new(request.team_count, request.girls_per_team);

    let (mut rosters, _) = build_rosters(request.students, &mut criteria)?;
    balance_teams(&mut rosters, &mut criteria);

    let teams = format_teams(rosters, &request.team_names, request.supervisors);

    Ok(FormationOutcome { teams, criteria })
}

/// Partitions, distributes, and assigns — everything before balancing.
///
/// Derives `criteria.bachelor_quota` on the way: the ceiling of the
/// bachelor count over the team count. Returns the rosters together
/// with the slot distribution they were filled from.
pub fn build_rosters(
    students: Vec<Student>,
    criteria: &mut FormationCriteria,
) -> Result<(Vec<Vec<Student>>, SlotDistribution)> {
    let student_count = students.len();
    let strata = partition_students(students)?;

    criteria.bachelor_quota = strata.bachelor_count().div_ceil(criteria.team_count);

    tracing::debug!(
        female_bachelor = strata.female_bachelor.len(),
        male_bachelor = strata.male_bachelor.len(),
        female_non_bachelor = strata.female_non_bachelor.len(),
        male_non_bachelor = strata.male_non_bachelor.len(),
        bachelor_quota = criteria.bachelor_quota,
        "pool partitioned"
    );

    let team_sizes = distribute_equitably(student_count, criteria.team_count);
    let girls_dist = distribute_girls(strata.girl_count(), &team_sizes, criteria.girls_per_team)?;
    let distribution = distribute_bachelors(
        strata.female_bachelor.len(),
        strata.male_bachelor.len(),
        &girls_dist,
        &team_sizes,
    )?;

    tracing::debug!(?distribution, "slots distributed");

    let rosters = assign_to_teams(&distribution, strata);
    Ok((rosters, distribution))
}

/// Wraps balanced rosters into named teams with supervisors attached
/// by list order.
fn format_teams(
    rosters: Vec<Vec<Student>>,
    names: &[String],
    supervisors: Vec<Supervisor>,
) -> Vec<Team> {
    rosters
        .into_iter()
        .zip(supervisors)
        .enumerate()
        .map(|(i, (members, supervisor))| {
            let name = names
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("Team {}", i + 1));
            Team::new(name, members).with_supervisor(supervisor)
        })
        .collect()
}
