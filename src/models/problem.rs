//! Search-problem trait and the concrete TSP formulation.

use crate::distance::DistanceTable;
use crate::error::{Result, TspError};

use super::{City, Route};

/// Defines a state-space search problem.
///
/// This trait exposes the capability set generic search algorithms work
/// against: an initial state, legal moves, a transition function, a goal
/// test, transition pricing, and a heuristic estimate. Implementations
/// perform no search themselves; [`TspProblem`] is one concrete formulation
/// among an open set of route-finding variants.
///
/// # Examples
///
/// ```
/// use tsp_exact::models::{City, SearchProblem, TspProblem};
/// use tsp_exact::distance::DistanceTable;
///
/// let cities = vec![City::new("A"), City::new("B")];
/// let mut distances = DistanceTable::new();
/// distances.insert_symmetric(City::new("A"), City::new("B"), 10.0);
/// let problem = TspProblem::new(cities, distances, City::new("A")).unwrap();
///
/// let state = problem.initial();
/// let moves = problem.actions(&state);
/// assert_eq!(moves, vec![City::new("B")]);
/// let next = problem.result(&state, &moves[0]);
/// assert!(!problem.is_goal(&next));
/// ```
pub trait SearchProblem {
    /// A point in the state space.
    type State;
    /// A legal move between states.
    type Action;

    /// Returns the state search begins from.
    fn initial(&self) -> Self::State;

    /// Returns the legal moves available in `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Returns the state reached by taking `action` in `state`.
    ///
    /// Does not mutate `state`. Callers must pass an action that is legal in
    /// `state` (taking it from [`actions`](Self::actions) is safe by
    /// construction); the implementation does not re-validate.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Returns `true` if `state` is a goal state. Pure predicate.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Returns the cost of taking `action` in `state`, reaching `next`.
    fn action_cost(&self, state: &Self::State, action: &Self::Action, next: &Self::State)
        -> Result<f64>;

    /// Heuristic estimate of the remaining cost-to-goal from `state`.
    ///
    /// Defaults to `0.0`, which is admissible but uninformative (informed
    /// search degrades to uniform-cost search).
    fn h(&self, _state: &Self::State) -> f64 {
        0.0
    }
}

/// A Traveling Salesman Problem instance: a set of named cities, a
/// directional distance table, and a designated start city.
///
/// States are partial [`Route`]s; actions are the cities not yet visited. A
/// goal state is a complete tour: every city visited exactly once, closed by
/// returning to the start.
///
/// The instance is read-only after construction. Construction validates
/// strictly: the start city must be in the city list and city names must be
/// unique.
#[derive(Debug, Clone)]
pub struct TspProblem {
    cities: Vec<City>,
    distances: DistanceTable,
    start: City,
}

impl TspProblem {
    /// Creates a problem instance.
    ///
    /// # Errors
    ///
    /// - [`TspError::StartNotInCities`] if `start` is not a member of
    ///   `cities` (an empty city list therefore always fails).
    /// - [`TspError::DuplicateCity`] if `cities` repeats a name.
    pub fn new(cities: Vec<City>, distances: DistanceTable, start: City) -> Result<Self> {
        if !cities.contains(&start) {
            return Err(TspError::StartNotInCities(start));
        }
        for (i, city) in cities.iter().enumerate() {
            if cities[..i].contains(city) {
                return Err(TspError::DuplicateCity(city.clone()));
            }
        }
        Ok(Self {
            cities,
            distances,
            start,
        })
    }

    /// Returns the cities of this instance, in construction order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Returns the distance table.
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Returns the designated start city.
    pub fn start(&self) -> &City {
        &self.start
    }

    /// Number of cities in this instance.
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }
}

impl SearchProblem for TspProblem {
    type State = Route;
    type Action = City;

    fn initial(&self) -> Route {
        Route::new(self.start.clone())
    }

    /// Every city not yet visited by `state`, in city-list order.
    ///
    /// `state` must be a non-empty route over this instance's cities.
    fn actions(&self, state: &Route) -> Vec<City> {
        self.cities
            .iter()
            .filter(|city| !state.contains(city))
            .cloned()
            .collect()
    }

    fn result(&self, state: &Route, action: &City) -> Route {
        state.with(action.clone())
    }

    fn is_goal(&self, state: &Route) -> bool {
        state.len() == self.cities.len() + 1 && state.first() == state.last()
    }

    /// Distance from `state`'s last city to `action`.
    fn action_cost(&self, state: &Route, action: &City, _next: &Route) -> Result<f64> {
        let from = state.last().expect("state route must be non-empty");
        self.distances
            .get(from, action)
            .ok_or_else(|| TspError::MissingDistance {
                from: from.clone(),
                to: action.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_problem() -> TspProblem {
        let cities: Vec<City> = ["A", "B", "C", "D"].map(City::new).to_vec();
        let mut distances = DistanceTable::new();
        distances.insert_symmetric(City::new("A"), City::new("B"), 10.0);
        distances.insert_symmetric(City::new("A"), City::new("C"), 15.0);
        distances.insert_symmetric(City::new("A"), City::new("D"), 20.0);
        distances.insert_symmetric(City::new("B"), City::new("C"), 35.0);
        distances.insert_symmetric(City::new("B"), City::new("D"), 25.0);
        distances.insert_symmetric(City::new("C"), City::new("D"), 30.0);
        TspProblem::new(cities, distances, City::new("A")).expect("valid instance")
    }

    #[test]
    fn test_new_rejects_missing_start() {
        let cities = vec![City::new("A"), City::new("B")];
        let err = TspProblem::new(cities, DistanceTable::new(), City::new("Z")).unwrap_err();
        assert_eq!(err, TspError::StartNotInCities(City::new("Z")));
    }

    #[test]
    fn test_new_rejects_empty_city_list() {
        let err = TspProblem::new(vec![], DistanceTable::new(), City::new("A")).unwrap_err();
        assert_eq!(err, TspError::StartNotInCities(City::new("A")));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let cities = vec![City::new("A"), City::new("B"), City::new("A")];
        let err = TspProblem::new(cities, DistanceTable::new(), City::new("A")).unwrap_err();
        assert_eq!(err, TspError::DuplicateCity(City::new("A")));
    }

    #[test]
    fn test_actions_excludes_visited() {
        let problem = square_problem();
        let state = problem.initial().with(City::new("C"));
        assert_eq!(
            problem.actions(&state),
            vec![City::new("B"), City::new("D")]
        );
    }

    #[test]
    fn test_actions_empty_when_all_visited() {
        let problem = square_problem();
        let state = Route::from_cities(["A", "B", "C", "D"].map(City::new).to_vec());
        assert!(problem.actions(&state).is_empty());
    }

    #[test]
    fn test_result_appends_without_mutating() {
        let problem = square_problem();
        let state = problem.initial();
        let next = problem.result(&state, &City::new("B"));
        assert_eq!(state.len(), 1);
        assert_eq!(next.cities(), ["A", "B"].map(City::new));
    }

    #[test]
    fn test_is_goal() {
        let problem = square_problem();
        let partial = Route::from_cities(["A", "B", "C", "D"].map(City::new).to_vec());
        assert!(!problem.is_goal(&partial));
        let closed = partial.with(City::new("A"));
        assert!(problem.is_goal(&closed));
        // Right length but not returned home
        let open = Route::from_cities(["A", "B", "C", "D", "B"].map(City::new).to_vec());
        assert!(!problem.is_goal(&open));
    }

    #[test]
    fn test_action_cost_directional_lookup() {
        let problem = square_problem();
        let state = problem.initial().with(City::new("B"));
        let action = City::new("D");
        let next = problem.result(&state, &action);
        let cost = problem.action_cost(&state, &action, &next).expect("entry present");
        assert_eq!(cost, 25.0);
    }

    #[test]
    fn test_action_cost_missing_entry() {
        let cities = vec![City::new("A"), City::new("B")];
        let problem =
            TspProblem::new(cities, DistanceTable::new(), City::new("A")).expect("valid instance");
        let state = problem.initial();
        let action = City::new("B");
        let next = problem.result(&state, &action);
        let err = problem.action_cost(&state, &action, &next).unwrap_err();
        assert_eq!(
            err,
            TspError::MissingDistance {
                from: City::new("A"),
                to: City::new("B"),
            }
        );
    }

    #[test]
    fn test_h_is_zero() {
        let problem = square_problem();
        assert_eq!(problem.h(&problem.initial()), 0.0);
    }
}
