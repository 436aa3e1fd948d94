//! Slot distribution across teams.
//!
//! Three composed algorithms that decide, before any student is
//! touched, how many slots each team gets:
//!
//! 1. **Equitable base split** — team sizes differ by at most one.
//! 2. **Girl-quota split** — place girls up to the per-team quota, or
//!    greedily absorb the excess when the pool holds more girls than
//!    the flat quota can seat.
//! 3. **Bachelor split** — convert girl slots to bachelor-girl slots,
//!    spread bachelor boys right-to-left keeping per-team bachelor
//!    counts flat, fill the remainder with non-bachelor boys.
//!
//! All three are pure index arithmetic over parallel vectors; the
//! output is a [`SlotDistribution`] consumed by the assigner.

use crate::error::{FormationError, Result};
use crate::models::SlotDistribution;

/// Splits `total` slots over `team_count` teams as evenly as possible.
///
/// Every team gets `total / team_count`; the first `total % team_count`
/// teams get one extra. Guarantees `sum == total` and a max-min spread
/// of at most 1.
///
/// # Example
///
/// ```
/// use teamforge::formation::distribute_equitably;
/// assert_eq!(distribute_equitably(5, 2), vec![3, 2]);
/// ```
pub fn distribute_equitably(total: usize, team_count: usize) -> Vec<usize> {
    let equal_share = total / team_count;
    let remainder = total % team_count;

    let mut distribution = vec![equal_share; team_count];
    for slot in distribution.iter_mut().take(remainder) {
        *slot += 1;
    }
    distribution
}

/// Distributes `total_girls` over the teams of `base`.
///
/// Two strategies, picked by whether the flat quota can seat everyone:
///
/// - **Evenly**: `total_girls / girls_per_team <= team_count` — fill
///   each team left to right up to `girls_per_team` (or whatever
///   remains), until the pool is exhausted.
/// - **Adjust**: more girls than the flat quota can place — walk teams
///   left to right, raising the working quota for each team only as far
///   as still leaves the teams to its right enough capacity for the
///   rest, then reverse the vector so the teams originally at the tail
///   absorb the largest excess. Callers relying on deterministic output
///   get exactly this ordering.
///
/// A zero quota with zero girls takes the evenly branch (all-zero
/// result); a zero quota with girls remaining takes the adjust branch,
/// which raises the quota itself.
///
/// Fails with [`FormationError::GirlPlacementStalled`] when the adjust
/// walk can no longer seat the remaining girls — no amount of quota
/// raising would ever satisfy the capacity look-ahead, so the walk
/// reports the dead end instead of spinning.
///
/// Invariant: `sum(result) == total_girls` whenever
/// `total_girls <= team_count * max(base)`.
pub fn distribute_girls(
    total_girls: usize,
    base: &[usize],
    girls_per_team: usize,
) -> Result<Vec<usize>> {
    let mut distribution = base.to_vec();
    let evenly = total_girls == 0
        || (girls_per_team > 0 && total_girls / girls_per_team <= base.len());
    if evenly {
        fill_evenly(&mut distribution, total_girls, girls_per_team);
    } else {
        fill_adjusted(&mut distribution, total_girls, girls_per_team)?;
        distribution.reverse();
    }
    Ok(distribution)
}

/// Front-fills each team up to the quota, left to right.
fn fill_evenly(distribution: &mut [usize], mut remaining: usize, girls_per_team: usize) {
    for slot in distribution.iter_mut() {
        if remaining >= girls_per_team {
            *slot = girls_per_team;
            remaining -= girls_per_team;
        } else {
            *slot = remaining;
            remaining = 0;
        }
    }
}

/// Greedy excess absorption.
///
/// For each team the working quota is raised until the remaining girls
/// still fit into the teams to the right at their base capacity. The
/// raised quota carries over to the next team — that carry-over is
/// observable in the output and must stay.
///
/// The raise loop is satisfiable only while the carried quota fits the
/// current team and the remainder fits the look-ahead; past either
/// bound no further raise can help, so the walk stops with an error.
fn fill_adjusted(
    distribution: &mut [usize],
    total_girls: usize,
    girls_per_team: usize,
) -> Result<()> {
    let mut remaining = total_girls as i64;
    let mut quota = girls_per_team as i64;

    for i in 0..distribution.len() {
        let actual_capacity = distribution[i] as i64;
        let future_capacity: i64 = distribution[i + 1..].iter().map(|&c| c as i64).sum();
        if quota > actual_capacity || remaining - future_capacity > actual_capacity {
            return Err(FormationError::GirlPlacementStalled);
        }
        while !(future_capacity >= remaining - quota && quota <= actual_capacity) {
            quota += 1;
        }
        distribution[i] = quota as usize;
        remaining -= quota;
    }
    Ok(())
}

/// Splits the girl and team-size vectors into the four stratum vectors.
///
/// # Algorithm
/// 1. Convert non-bachelor-girl slots into bachelor-girl slots in
///    repeated left→right scans until `bachelor_girls` are all seated.
/// 2. Seat `bachelor_boys` in repeated right→left scans over teams with
///    remaining boy capacity (girl slots plus seated boys under the
///    team size); a team is incremented only when it is the leftmost
///    (`i == 0`) or its left neighbour's placed-bachelor count is ≤ its
///    own, keeping bachelor counts as flat as possible.
/// 3. Non-bachelor boys fill whatever the team size leaves over.
///
/// A full scan that seats nobody can never make progress on a repeat,
/// so it fails with [`FormationError::BachelorPlacementStalled`]
/// instead of spinning. A girl vector that overflows a team size fails
/// the remainder fill with [`FormationError::SlotsExceedTeamSize`].
pub fn distribute_bachelors(
    bachelor_girls: usize,
    bachelor_boys: usize,
    girls_dist: &[usize],
    team_sizes: &[usize],
) -> Result<SlotDistribution> {
    let team_count = team_sizes.len();
    let mut bachelor_girl_dist = vec![0usize; team_count];
    let mut non_bachelor_girl_dist = girls_dist.to_vec();

    place_bachelor_girls(
        bachelor_girls,
        &mut bachelor_girl_dist,
        &mut non_bachelor_girl_dist,
    )?;

    let mut bachelor_boy_dist = vec![0usize; team_count];
    place_bachelor_boys(
        bachelor_boys,
        girls_dist,
        team_sizes,
        &mut bachelor_boy_dist,
    )?;

    // Remainder fill. With boy placements capped at capacity this can
    // only go negative when the girl vector itself overflows a team
    // size (a girls_per_team larger than the team).
    let non_bachelor_boy_dist: Vec<usize> = (0..team_count)
        .map(|i| {
            team_sizes[i]
                .checked_sub(bachelor_boy_dist[i])
                .and_then(|rest| rest.checked_sub(non_bachelor_girl_dist[i]))
                .and_then(|rest| rest.checked_sub(bachelor_girl_dist[i]))
                .ok_or(FormationError::SlotsExceedTeamSize)
        })
        .collect::<Result<_>>()?;

    Ok(SlotDistribution {
        bachelor_girls: bachelor_girl_dist,
        non_bachelor_girls: non_bachelor_girl_dist,
        bachelor_boys: bachelor_boy_dist,
        non_bachelor_boys: non_bachelor_boy_dist,
        team_sizes: team_sizes.to_vec(),
    })
}

/// Step 1: converts non-bachelor-girl slots into bachelor-girl slots,
/// one per eligible team per left→right scan.
fn place_bachelor_girls(
    mut remaining: usize,
    bachelor_girl_dist: &mut [usize],
    non_bachelor_girl_dist: &mut [usize],
) -> Result<()> {
    while remaining > 0 {
        let mut placed = false;
        for i in 0..bachelor_girl_dist.len() {
            if non_bachelor_girl_dist[i] > 0 {
                bachelor_girl_dist[i] += 1;
                non_bachelor_girl_dist[i] -= 1;
                remaining -= 1;
                placed = true;
                if remaining == 0 {
                    break;
                }
            }
        }
        if !placed {
            return Err(FormationError::BachelorPlacementStalled);
        }
    }
    Ok(())
}

/// Step 2: seats bachelor boys in repeated right→left scans.
///
/// A team is eligible while it still has spare boy capacity — its girl
/// slots plus the boys already seated stay under its size — so no team
/// ever holds more boys than it has boy slots. `bachelor_placed`
/// tracks only the boys seated by this step; the
/// `i == 0 || placed[i-1] <= placed[i]` tie-break is what keeps the
/// counts flat across teams.
fn place_bachelor_boys(
    mut remaining: usize,
    girls_dist: &[usize],
    team_sizes: &[usize],
    bachelor_boy_dist: &mut [usize],
) -> Result<()> {
    let mut bachelor_placed = vec![0usize; team_sizes.len()];
    while remaining > 0 {
        let mut placed = false;
        for i in (0..team_sizes.len()).rev() {
            if girls_dist[i] + bachelor_boy_dist[i] < team_sizes[i]
                && (i == 0 || bachelor_placed[i - 1] <= bachelor_placed[i])
            {
                bachelor_boy_dist[i] += 1;
                bachelor_placed[i] += 1;
                remaining -= 1;
                placed = true;
                if remaining == 0 {
                    break;
                }
            }
        }
        if !placed {
            return Err(FormationError::BachelorPlacementStalled);
        }
    }
    Ok(())
}
