//! Solution type.

use serde::{Deserialize, Serialize};

use super::Route;

/// The outcome of a solve: the best complete tour found and its total cost.
///
/// Total cost is the sum of directional distance lookups along the tour's
/// consecutive city pairs. Produced once per solver invocation; not
/// incrementally updatable.
///
/// # Examples
///
/// ```
/// use tsp_exact::models::{City, Route, Solution};
///
/// let tour = Route::from_cities(vec![City::new("A"), City::new("B"), City::new("A")]);
/// let solution = Solution::new(tour, 20.0);
/// assert_eq!(solution.total_cost(), 20.0);
/// assert_eq!(solution.tour().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    tour: Route,
    total_cost: f64,
}

impl Solution {
    /// Creates a solution from a tour and its total cost.
    pub fn new(tour: Route, total_cost: f64) -> Self {
        Self { tour, total_cost }
    }

    /// Returns the best tour.
    pub fn tour(&self) -> &Route {
        &self.tour
    }

    /// Returns the tour's total cost.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}
