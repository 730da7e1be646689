//! # tsp-exact
//!
//! Exact Traveling Salesman Problem solving over a small, fully connected
//! set of named cities: exhaustive permutation search for the minimum-cost
//! closed tour that starts and ends at a designated city and visits every
//! other city exactly once.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Route, Solution, SearchProblem trait, TspProblem)
//! - [`distance`] — Directional city-to-city distance table
//! - [`evaluation`] — Tour cost computation
//! - [`solver`] — Exhaustive brute-force solver
//! - [`error`] — Error taxonomy

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod solver;
