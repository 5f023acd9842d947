//! # Design Settings
//!
//! Tunable constants of the prescriptive method. `DesignSettings::default()`
//! reproduces the published rule set; callers only override these to study
//! alternatives (e.g. 12" joist spacing).
//!
//! ## JSON / TOML
//!
//! Every field has a default, so a partial document is enough:
//!
//! ```json
//! { "joist_spacing": 12, "target_post_spacing_ft": 6.0 }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};
use crate::loads::DesignLoads;
use crate::span_tables::JoistSpacing;

/// Target (maximum) distance between posts along a beam (ft)
pub const TARGET_POST_SPACING_FT: f64 = 8.0;

/// Cantilever used when the deck is deep enough (ft)
pub const PREFERRED_CANTILEVER_FT: f64 = 2.0;

/// Maximum cantilever as a fraction of deck depth
pub const MAX_CANTILEVER_RATIO: f64 = 0.25;

/// Nominal decking board thickness (in)
pub const DECKING_THICKNESS_IN: f64 = 1.0;

/// Settings applied to every structure generated with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Joist on-center spacing
    pub joist_spacing: JoistSpacing,

    /// Starting post spacing; the actual spacing evenly divides the width
    pub target_post_spacing_ft: f64,

    /// Cantilever applied to ledger-attached decks, capped by the ratio
    pub preferred_cantilever_ft: f64,

    /// Cantilever limit as a fraction of depth
    pub max_cantilever_ratio: f64,

    /// Decking thickness between joist top and deck surface (in)
    pub decking_thickness_in: f64,

    /// Uniform design loads
    pub loads: DesignLoads,
}

impl DesignSettings {
    /// Settings with a different joist spacing
    pub fn with_joist_spacing(mut self, spacing: JoistSpacing) -> Self {
        self.joist_spacing = spacing;
        self
    }

    /// Validate settings before they drive a generation run.
    pub fn validate(&self) -> DeckResult<()> {
        if !(self.target_post_spacing_ft > 0.0) {
            return Err(DeckError::invalid_input(
                "target_post_spacing_ft",
                self.target_post_spacing_ft.to_string(),
                "Post spacing must be positive",
            ));
        }
        if !(self.max_cantilever_ratio > 0.0 && self.max_cantilever_ratio <= 1.0) {
            return Err(DeckError::invalid_input(
                "max_cantilever_ratio",
                self.max_cantilever_ratio.to_string(),
                "Cantilever ratio must be in (0, 1]",
            ));
        }
        if !(self.preferred_cantilever_ft >= 0.0) {
            return Err(DeckError::invalid_input(
                "preferred_cantilever_ft",
                self.preferred_cantilever_ft.to_string(),
                "Cantilever cannot be negative",
            ));
        }
        if !(self.decking_thickness_in >= 0.0) {
            return Err(DeckError::invalid_input(
                "decking_thickness_in",
                self.decking_thickness_in.to_string(),
                "Decking thickness cannot be negative",
            ));
        }
        self.loads.validate()
    }
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            joist_spacing: JoistSpacing::default(),
            target_post_spacing_ft: TARGET_POST_SPACING_FT,
            preferred_cantilever_ft: PREFERRED_CANTILEVER_FT,
            max_cantilever_ratio: MAX_CANTILEVER_RATIO,
            decking_thickness_in: DECKING_THICKNESS_IN,
            loads: DesignLoads::default(),
        }
    }
}
