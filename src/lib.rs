//! Team-formation and balancing engine.
//!
//! Partitions a pool of students into a fixed number of teams under
//! gender and prior-degree ("bachelor") quota constraints, then
//! rebalances rosters until the spread of team grade averages falls
//! under an adaptive tolerance.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Student`, `Supervisor`, `Team`,
//!   `FormationCriteria`, `SlotDistribution`
//! - **`validation`**: Input pool checks before any computation
//! - **`formation`**: The four-stage pipeline — partition, distribute,
//!   assign, balance
//!
//! # Pipeline
//!
//! Data flows strictly Partitioner → Distributor → Assigner → Balancer.
//! The whole run is a pure function boundary:
//! `(students, supervisors, names, team_count, girls_per_team)
//! → (teams, criteria)`. Single-threaded, deterministic (all sorts are
//! stable), no state shared across invocations.
//!
//! # Example
//!
//! ```
//! use teamforge::formation::{form_teams, FormationRequest};
//! use teamforge::models::{Gender, Student, Supervisor};
//!
//! let students = vec![
//!     Student::new("f1", Gender::Female).with_grade(90.0),
//!     Student::new("f2", Gender::Female).with_grade(80.0),
//!     Student::new("m1", Gender::Male).with_grade(95.0),
//!     Student::new("m2", Gender::Male).with_grade(88.0),
//! ];
//! let supervisors = vec![Supervisor::new("t1"), Supervisor::new("t2")];
//!
//! let request = FormationRequest::new(students, supervisors, 2, 1);
//! let outcome = form_teams(request).unwrap();
//! assert_eq!(outcome.teams.len(), 2);
//! ```

pub mod error;
pub mod formation;
pub mod models;
pub mod validation;

pub use error::{FormationError, Result};
