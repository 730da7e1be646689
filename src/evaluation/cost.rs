//! Route pricing.

use crate::distance::DistanceTable;
use crate::error::{Result, TspError};
use crate::models::Route;

/// Computes the total cost of a route as the sum of directional distance
/// lookups for each consecutive city pair.
///
/// Lookups follow traversal direction strictly, so asymmetric tables price
/// each leg by its origin and destination. A route with fewer than two
/// entries has no legs and costs `0.0`.
///
/// # Errors
///
/// [`TspError::MissingDistance`] if any required ordered pair has no entry;
/// the offending pair is named in the error.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::DistanceTable;
/// use tsp_exact::evaluation::tour_cost;
/// use tsp_exact::models::{City, Route};
///
/// let mut table = DistanceTable::new();
/// table.insert_symmetric(City::new("A"), City::new("B"), 10.0);
/// let tour = Route::from_cities(vec![City::new("A"), City::new("B"), City::new("A")]);
/// assert_eq!(tour_cost(&tour, &table).unwrap(), 20.0);
/// ```
pub fn tour_cost(route: &Route, distances: &DistanceTable) -> Result<f64> {
    let mut total = 0.0;
    for pair in route.cities().windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let leg = distances
            .get(from, to)
            .ok_or_else(|| TspError::MissingDistance {
                from: from.clone(),
                to: to.clone(),
            })?;
        total += leg;
    }
    Ok(total)
}
