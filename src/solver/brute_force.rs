//! Exhaustive brute-force solver.
//!
//! Enumerates every closed tour from the start city and keeps the cheapest.
//! No pruning, branch-and-bound, or memoization: this is a correctness
//! reference for small instances, not a scalable solver.
//!
//! # Complexity
//!
//! O((n-1)!·n) time for n cities: the start is fixed, the remaining n-1
//! cities are permuted, and each candidate tour is priced over its n edges.
//! Practical only for n up to about 10-11.

use itertools::Itertools;

use crate::error::Result;
use crate::evaluation::tour_cost;
use crate::models::{City, Route, Solution, TspProblem};

/// Finds the globally optimal closed tour by exhaustive enumeration.
///
/// Every permutation of the non-start cities is closed into a round trip
/// (start prepended and appended) and priced with directional distance
/// lookups. The minimum is tracked under strict less-than, so on ties the
/// first tour in enumeration order wins; enumeration is lexicographic in
/// city-list order, making repeated solves deterministic.
///
/// A single-city instance yields the trivial tour `start -> start` with cost
/// `0.0`; no distance lookup is made, since a self-distance is never priced.
///
/// # Errors
///
/// [`TspError::MissingDistance`](crate::error::TspError::MissingDistance) if
/// any tour needs an ordered city pair the table lacks. The solve aborts
/// with no partial result.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::DistanceTable;
/// use tsp_exact::models::{City, TspProblem};
/// use tsp_exact::solver::brute_force;
///
/// let cities: Vec<City> = ["A", "B", "C"].map(City::new).to_vec();
/// let mut distances = DistanceTable::new();
/// distances.insert_symmetric(City::new("A"), City::new("B"), 1.0);
/// distances.insert_symmetric(City::new("B"), City::new("C"), 2.0);
/// distances.insert_symmetric(City::new("A"), City::new("C"), 4.0);
/// let problem = TspProblem::new(cities, distances, City::new("A")).unwrap();
///
/// let solution = brute_force(&problem).unwrap();
/// assert_eq!(solution.total_cost(), 7.0);
/// assert_eq!(solution.tour().len(), 4);
/// ```
pub fn brute_force(problem: &TspProblem) -> Result<Solution> {
    let start = problem.start();
    let rest: Vec<&City> = problem.cities().iter().filter(|c| *c != start).collect();

    if rest.is_empty() {
        let tour = Route::from_cities(vec![start.clone(), start.clone()]);
        return Ok(Solution::new(tour, 0.0));
    }

    let mut best: Option<(Route, f64)> = None;
    for perm in (0..rest.len()).permutations(rest.len()) {
        let mut cities = Vec::with_capacity(rest.len() + 2);
        cities.push(start.clone());
        cities.extend(perm.iter().map(|&i| rest[i].clone()));
        cities.push(start.clone());
        let tour = Route::from_cities(cities);

        let cost = tour_cost(&tour, problem.distances())?;
        // Strict less-than keeps the first tour at a tied minimum
        let improves = match &best {
            None => true,
            Some((_, best_cost)) => cost < *best_cost,
        };
        if improves {
            best = Some((tour, cost));
        }
    }

    let (tour, cost) = best.expect("at least one permutation exists for a non-empty rest");
    Ok(Solution::new(tour, cost))
}
