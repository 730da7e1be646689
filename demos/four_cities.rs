//! Worked 4-city example.
//!
//! Solves the symmetric reference instance (cities A, B, C, D, start A) and
//! prints the best closed tour and its cost. Expected output:
//!
//! ```text
//! Best route: A -> B -> D -> C -> A
//! Route cost: 80
//! ```

use tsp_exact::distance::DistanceTable;
use tsp_exact::error::Result;
use tsp_exact::models::{City, TspProblem};
use tsp_exact::solver::brute_force;

fn main() -> Result<()> {
    let cities: Vec<City> = ["A", "B", "C", "D"].map(City::new).to_vec();

    let mut distances = DistanceTable::new();
    distances.insert_symmetric(City::new("A"), City::new("B"), 10.0);
    distances.insert_symmetric(City::new("A"), City::new("C"), 15.0);
    distances.insert_symmetric(City::new("A"), City::new("D"), 20.0);
    distances.insert_symmetric(City::new("B"), City::new("C"), 35.0);
    distances.insert_symmetric(City::new("B"), City::new("D"), 25.0);
    distances.insert_symmetric(City::new("C"), City::new("D"), 30.0);

    let problem = TspProblem::new(cities, distances, City::new("A"))?;
    let solution = brute_force(&problem)?;

    println!("Best route: {}", solution.tour());
    println!("Route cost: {}", solution.total_cost());
    Ok(())
}
