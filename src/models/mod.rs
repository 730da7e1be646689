//! Domain model types for exact TSP solving.
//!
//! Provides the core abstractions: named cities, routes as ordered visiting
//! sequences, a generic search-problem trait, the concrete TSP formulation,
//! and the solution type returned by solvers.

mod city;
mod problem;
mod route;
mod solution;

pub use city::City;
pub use problem::{SearchProblem, TspProblem};
pub use route::Route;
pub use solution::Solution;
