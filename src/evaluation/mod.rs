//! Tour cost evaluation.
//!
//! Prices a route by walking its consecutive city pairs against the
//! distance table.

mod cost;

pub use cost::tour_cost;
