//! Gravity load types carried by a residential deck.

use serde::{Deserialize, Serialize};

/// Load categories used in deck footing design.
///
/// # Example
/// ```
/// use deck_core::loads::LoadType;
///
/// assert_eq!(LoadType::Dead.code(), "D");
/// assert_eq!(LoadType::Live.description(), "Live load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// D - Framing and decking self-weight
    Dead,
    /// L - Occupant live load
    Live,
}

impl LoadType {
    pub const ALL: [LoadType; 2] = [LoadType::Dead, LoadType::Live];

    /// Standard abbreviation code (D, L)
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "D",
            LoadType::Live => "L",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Live => "Live load",
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
