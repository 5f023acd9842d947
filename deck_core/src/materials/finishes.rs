//! Decking and railing selections.
//!
//! The framing engine never prices or draws these; it carries them on the
//! site input so the quoting and drawing layers see the customer's choice.
//! Both are closed sets: an unknown value is rejected when it is decoded.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};

/// Deck surface material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeckingType {
    /// Trex composite
    #[default]
    #[serde(rename = "trex")]
    CompositeTrex,
    /// TimberTech composite
    #[serde(rename = "timbertech")]
    CompositeTimbertech,
    /// Cedar boards
    #[serde(rename = "cedar")]
    Cedar,
    /// Pressure-treated wood boards
    #[serde(rename = "pt_wood")]
    PressureTreated,
}

impl DeckingType {
    pub const ALL: [DeckingType; 4] = [
        DeckingType::CompositeTrex,
        DeckingType::CompositeTimbertech,
        DeckingType::Cedar,
        DeckingType::PressureTreated,
    ];

    /// Wire value (e.g., "pt_wood")
    pub fn code(&self) -> &'static str {
        match self {
            DeckingType::CompositeTrex => "trex",
            DeckingType::CompositeTimbertech => "timbertech",
            DeckingType::Cedar => "cedar",
            DeckingType::PressureTreated => "pt_wood",
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, DeckingType::CompositeTrex | DeckingType::CompositeTimbertech)
    }
}

impl FromStr for DeckingType {
    type Err = DeckError;

    fn from_str(s: &str) -> DeckResult<Self> {
        DeckingType::ALL
            .iter()
            .copied()
            .find(|t| t.code() == s)
            .ok_or_else(|| DeckError::invalid_input("decking_type", s, "Unknown decking type"))
    }
}

/// Guard railing material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RailingType {
    #[default]
    None,
    Wood,
    Cable,
    Glass,
    Aluminum,
}

impl RailingType {
    pub const ALL: [RailingType; 5] = [
        RailingType::None,
        RailingType::Wood,
        RailingType::Cable,
        RailingType::Glass,
        RailingType::Aluminum,
    ];

    /// Wire value (e.g., "cable")
    pub fn code(&self) -> &'static str {
        match self {
            RailingType::None => "none",
            RailingType::Wood => "wood",
            RailingType::Cable => "cable",
            RailingType::Glass => "glass",
            RailingType::Aluminum => "aluminum",
        }
    }
}

impl FromStr for RailingType {
    type Err = DeckError;

    fn from_str(s: &str) -> DeckResult<Self> {
        RailingType::ALL
            .iter()
            .copied()
            .find(|t| t.code() == s)
            .ok_or_else(|| DeckError::invalid_input("railing_type", s, "Unknown railing type"))
    }
}
