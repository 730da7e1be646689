//! Error types for TSP problem construction and solving.

use thiserror::Error;

use crate::models::City;

/// Errors produced while building or solving a TSP instance.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TspError {
    /// The distance table has no entry for a required ordered city pair.
    ///
    /// Raised during cost computation; the solve aborts with no partial
    /// result.
    #[error("no distance entry from '{from}' to '{to}'")]
    MissingDistance {
        /// Origin city of the missing entry.
        from: City,
        /// Destination city of the missing entry.
        to: City,
    },

    /// The designated start city is not a member of the city list.
    #[error("start city '{0}' is not in the city list")]
    StartNotInCities(City),

    /// The city list contains the same city more than once.
    #[error("duplicate city '{0}' in city list")]
    DuplicateCity(City),
}

/// Result type alias for TSP operations.
pub type Result<T> = std::result::Result<T, TspError>;
