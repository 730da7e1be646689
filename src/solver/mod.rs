//! Exact solvers.
//!
//! - [`brute_force`] — Exhaustive enumeration of every closed tour, O((n-1)!·n)

mod brute_force;

pub use brute_force::brute_force;
