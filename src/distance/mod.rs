//! Directional city-to-city distances.
//!
//! Provides a lookup table keyed by ordered (origin, destination) pairs.

mod table;

pub use table::DistanceTable;
