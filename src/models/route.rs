//! Route type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::City;

/// An ordered visiting sequence of cities, built by appending one city at a
/// time.
///
/// A route never repeats a city, with one exception: in a *complete tour*
/// the first and last entries coincide (both equal the start city), marking
/// the return home. Completeness itself is judged by the problem instance
/// (see [`SearchProblem::is_goal`](super::SearchProblem::is_goal)), since it
/// depends on the instance's city count.
///
/// # Examples
///
/// ```
/// use tsp_exact::models::{City, Route};
///
/// let route = Route::new(City::new("A")).with(City::new("B"));
/// assert_eq!(route.len(), 2);
/// assert!(route.contains(&City::new("B")));
/// assert_eq!(route.to_string(), "A -> B");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    cities: Vec<City>,
}

impl Route {
    /// Creates a route containing only the given start city.
    pub fn new(start: City) -> Self {
        Self {
            cities: vec![start],
        }
    }

    /// Creates a route from an explicit visiting sequence.
    pub fn from_cities(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Returns a new route equal to this one with `city` appended.
    ///
    /// Does not mutate `self`. The caller is responsible for appending only
    /// cities not already visited (the closing return to the start excepted).
    pub fn with(&self, city: City) -> Self {
        let mut cities = self.cities.clone();
        cities.push(city);
        Self { cities }
    }

    /// Returns the visiting sequence.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of entries in the visiting sequence.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the route has no entries.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// First city of the route, if any.
    pub fn first(&self) -> Option<&City> {
        self.cities.first()
    }

    /// Last city of the route, if any.
    pub fn last(&self) -> Option<&City> {
        self.cities.last()
    }

    /// Returns `true` if the route already visits `city`.
    pub fn contains(&self, city: &City) -> bool {
        self.cities.contains(city)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, city) in self.cities.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            fmt::Display::fmt(city, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_single_entry() {
        let r = Route::new(City::new("A"));
        assert_eq!(r.len(), 1);
        assert!(!r.is_empty());
        assert_eq!(r.first(), Some(&City::new("A")));
        assert_eq!(r.last(), Some(&City::new("A")));
    }

    #[test]
    fn test_with_does_not_mutate() {
        let base = Route::new(City::new("A"));
        let extended = base.with(City::new("B"));
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.last(), Some(&City::new("B")));
    }

    #[test]
    fn test_contains() {
        let r = Route::new(City::new("A")).with(City::new("B"));
        assert!(r.contains(&City::new("A")));
        assert!(r.contains(&City::new("B")));
        assert!(!r.contains(&City::new("C")));
    }

    #[test]
    fn test_closed_tour_endpoints_coincide() {
        let r = Route::from_cities(vec![
            City::new("A"),
            City::new("B"),
            City::new("C"),
            City::new("A"),
        ]);
        assert_eq!(r.first(), r.last());
        assert_eq!(r.len(), 4);
    }

    #[test]
    fn test_display() {
        let r = Route::from_cities(vec![City::new("A"), City::new("B"), City::new("A")]);
        assert_eq!(r.to_string(), "A -> B -> A");
    }
}
