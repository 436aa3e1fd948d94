//! Input validation for a formation run.
//!
//! Checks the student and supervisor pools before any partitioning or
//! distribution work starts. Detects:
//! - Empty pools (students or supervisors)
//! - Fewer students than teams
//! - Fewer supervisors than teams
//! - A zero team count
//!
//! The checks are ordered and fail-fast: callers may react differently
//! to "nothing to work with" than to "too few entries for this team
//! count" (prompt for more data vs. reduce the team count), so the two
//! cases carry distinct errors.

use crate::error::{FormationError, Result};
use crate::models::{Student, Supervisor};

/// Validates the input pools for a formation run.
///
/// Checks, in order:
/// 1. `team_count` is non-zero
/// 2. Neither pool is empty
/// 3. At least `team_count` students
/// 4. At least `team_count` supervisors
///
/// # Returns
/// `Ok(())` if all checks pass, the first failing check's error otherwise.
pub fn validate_pools(
    students: &[Student],
    supervisors: &[Supervisor],
    team_count: usize,
) -> Result<()> {
    if team_count == 0 {
        return Err(FormationError::ZeroTeamCount);
    }
    if students.is_empty() || supervisors.is_empty() {
        return Err(FormationError::EmptyPools);
    }
    if students.len() < team_count {
        return Err(FormationError::InsufficientStudents {
            available: students.len(),
            team_count,
        });
    }
    if supervisors.len() < team_count {
        return Err(FormationError::InsufficientSupervisors {
            available: supervisors.len(),
            team_count,
        });
    }
    Ok(())
}
