//! Directional distance table.

use std::collections::HashMap;

use crate::models::City;

/// A directional distance table mapping ordered (origin, destination) city
/// pairs to non-negative costs.
///
/// Lookups are strictly directional: the cost from `a` to `b` is independent
/// of the cost from `b` to `a`, and no symmetry is required.
/// [`insert_symmetric`](Self::insert_symmetric) is a convenience for the
/// common symmetric case. A solve requires the table to be complete over the
/// instance's cities (see [`is_complete`](Self::is_complete)); a missing
/// entry surfaces as an error at cost-computation time.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::DistanceTable;
/// use tsp_exact::models::City;
///
/// let mut table = DistanceTable::new();
/// table.insert_symmetric(City::new("A"), City::new("B"), 10.0);
/// assert_eq!(table.get(&City::new("A"), &City::new("B")), Some(10.0));
/// assert_eq!(table.get(&City::new("B"), &City::new("A")), Some(10.0));
/// assert_eq!(table.get(&City::new("A"), &City::new("C")), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    entries: HashMap<City, HashMap<City, f64>>,
}

impl DistanceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cost from `from` to `to`, replacing any previous entry.
    pub fn insert(&mut self, from: City, to: City, cost: f64) {
        self.entries.entry(from).or_default().insert(to, cost);
    }

    /// Sets the cost in both directions.
    pub fn insert_symmetric(&mut self, a: City, b: City, cost: f64) {
        self.insert(a.clone(), b.clone(), cost);
        self.insert(b, a, cost);
    }

    /// Returns the cost from `from` to `to`, or `None` if the ordered pair
    /// has no entry.
    pub fn get(&self, from: &City, to: &City) -> Option<f64> {
        self.entries.get(from)?.get(to).copied()
    }

    /// Number of directional entries in the table.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if every ordered pair of distinct cities in `cities`
    /// has an entry.
    pub fn is_complete(&self, cities: &[City]) -> bool {
        cities
            .iter()
            .flat_map(|from| cities.iter().map(move |to| (from, to)))
            .filter(|(from, to)| from != to)
            .all(|(from, to)| self.get(from, to).is_some())
    }

    /// Returns `true` if every entry matches its reverse within the given
    /// tolerance.
    ///
    /// Diagnostic only; solving never assumes symmetry.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.entries.iter().all(|(from, destinations)| {
            destinations.iter().all(|(to, &cost)| {
                self.get(to, from)
                    .is_some_and(|reverse| (cost - reverse).abs() <= tol)
            })
        })
    }
}
