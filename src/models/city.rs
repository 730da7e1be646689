//! City identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque city identifier, backed by its name.
///
/// Cities are compared and hashed by name; order among them carries no
/// meaning except for the designated start of a problem instance.
///
/// # Examples
///
/// ```
/// use tsp_exact::models::City;
///
/// let a = City::new("A");
/// assert_eq!(a, City::new("A"));
/// assert_ne!(a, City::new("B"));
/// assert_eq!(a.name(), "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct City(String);

impl City {
    /// Creates a city from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the city's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for City {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for City {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
