//! # Prescriptive Span Tables
//!
//! Lookup tables from the municipal prescriptive deck code (Seattle SDCI
//! Tip 312), for pressure-treated lumber under a 40 psf live / 15 psf dead
//! residential deck load.
//!
//! ## Tables
//!
//! | Table              | Key                               | Value              |
//! |--------------------|-----------------------------------|--------------------|
//! | Joist spans        | (size, on-center spacing)         | max joist span ft  |
//! | Beam spans         | (beam designation, joist category)| max beam span ft   |
//! | Post height limits | post size                         | max post height ft |
//!
//! All tables are `match` expressions over closed enums, so they are fixed at
//! compile time and safe to read from any thread.

use serde::{Deserialize, Serialize};

use crate::errors::DeckError;
use crate::materials::{BeamDesignation, LumberSize, PlyCount};

// ============================================================================
// Joist spacing
// ============================================================================

/// Joist on-center spacing
///
/// Serializes as the bare inch value (12, 16 or 24). Any other integer fails
/// to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum JoistSpacing {
    /// 12" O.C.
    Oc12,
    /// 16" O.C.
    #[default]
    Oc16,
    /// 24" O.C.
    Oc24,
}

impl JoistSpacing {
    pub const ALL: [JoistSpacing; 3] = [JoistSpacing::Oc12, JoistSpacing::Oc16, JoistSpacing::Oc24];

    /// Spacing in inches
    pub fn inches(&self) -> u32 {
        match self {
            JoistSpacing::Oc12 => 12,
            JoistSpacing::Oc16 => 16,
            JoistSpacing::Oc24 => 24,
        }
    }

    /// Spacing in feet
    pub fn feet(&self) -> f64 {
        self.inches() as f64 / 12.0
    }
}

impl TryFrom<u32> for JoistSpacing {
    type Error = DeckError;

    fn try_from(inches: u32) -> Result<Self, Self::Error> {
        match inches {
            12 => Ok(JoistSpacing::Oc12),
            16 => Ok(JoistSpacing::Oc16),
            24 => Ok(JoistSpacing::Oc24),
            other => Err(DeckError::invalid_input(
                "joist_spacing_in",
                other.to_string(),
                "Joist spacing must be 12, 16 or 24 inches",
            )),
        }
    }
}

impl From<JoistSpacing> for u32 {
    fn from(spacing: JoistSpacing) -> u32 {
        spacing.inches()
    }
}

impl std::fmt::Display for JoistSpacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\" O.C.", self.inches())
    }
}

// ============================================================================
// Joist span category
// ============================================================================

/// Joist span rounded up to the beam table's column headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JoistSpanCategory {
    #[serde(rename = "6")]
    Upto6,
    #[serde(rename = "8")]
    Upto8,
    #[serde(rename = "10")]
    Upto10,
    #[serde(rename = "12")]
    Upto12,
}

impl JoistSpanCategory {
    /// Round a joist span up to its category. Anything past 10' reads the
    /// 12' column.
    pub fn from_span(joist_span_ft: f64) -> Self {
        if joist_span_ft <= 6.0 {
            JoistSpanCategory::Upto6
        } else if joist_span_ft <= 8.0 {
            JoistSpanCategory::Upto8
        } else if joist_span_ft <= 10.0 {
            JoistSpanCategory::Upto10
        } else {
            JoistSpanCategory::Upto12
        }
    }

    /// Column heading (e.g., "10")
    pub fn label(&self) -> &'static str {
        match self {
            JoistSpanCategory::Upto6 => "6",
            JoistSpanCategory::Upto8 => "8",
            JoistSpanCategory::Upto10 => "10",
            JoistSpanCategory::Upto12 => "12",
        }
    }
}

impl std::fmt::Display for JoistSpanCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Tables
// ============================================================================

/// Maximum joist span (ft) for a size at a spacing.
///
/// Returns `None` for sizes that are not joist sizes.
pub fn joist_max_span(size: LumberSize, spacing: JoistSpacing) -> Option<f64> {
    use JoistSpacing::*;
    use LumberSize::*;

    let span = match (size, spacing) {
        (L2x6, Oc12) => 10.5,
        (L2x6, Oc16) => 9.5,
        (L2x6, Oc24) => 8.0,
        (L2x8, Oc12) => 13.83,
        (L2x8, Oc16) => 12.5,
        (L2x8, Oc24) => 10.5,
        (L2x10, Oc12) => 17.67,
        (L2x10, Oc16) => 16.0,
        (L2x10, Oc24) => 13.5,
        (L2x12, Oc12) => 21.5,
        (L2x12, Oc16) => 19.5,
        (L2x12, Oc24) => 16.5,
        _ => return None,
    };
    Some(span)
}

/// Row values for one beam depth, indexed by joist category 6/8/10/12.
fn beam_row(depth: LumberSize) -> Option<[f64; 4]> {
    use LumberSize::*;

    match depth {
        L2x6 | L4x6 => Some([5.5, 4.5, 4.0, 3.5]),
        L2x8 | L4x8 => Some([7.0, 6.0, 5.5, 5.0]),
        L2x10 | L4x10 => Some([9.0, 8.0, 7.0, 6.5]),
        L2x12 | L4x12 => Some([11.0, 9.5, 8.5, 7.5]),
        _ => None,
    }
}

/// Maximum beam span (ft) between posts for a beam designation and joist
/// span category.
///
/// The table lists doubled 2x beams ("2-2x8") and solid 4x beams ("4x8").
/// Any other combination returns `None`.
pub fn beam_max_span(beam: BeamDesignation, category: JoistSpanCategory) -> Option<f64> {
    let tabulated = match beam.plies {
        PlyCount::Double => LumberSize::DIMENSION_2X.contains(&beam.size),
        PlyCount::Single => LumberSize::SOLID_4X.contains(&beam.size),
    };
    if !tabulated {
        return None;
    }

    let row = beam_row(beam.size)?;
    let index = match category {
        JoistSpanCategory::Upto6 => 0,
        JoistSpanCategory::Upto8 => 1,
        JoistSpanCategory::Upto10 => 2,
        JoistSpanCategory::Upto12 => 3,
    };
    Some(row[index])
}

/// Maximum unsupported post height (ft) for a post size.
pub fn post_height_limit(size: LumberSize) -> Option<f64> {
    match size {
        LumberSize::L4x4 => Some(8.0),
        LumberSize::L4x6 => Some(14.0),
        // Practical limit
        LumberSize::L6x6 => Some(20.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joist_spans() {
        assert_eq!(joist_max_span(LumberSize::L2x6, JoistSpacing::Oc16), Some(9.5));
        assert_eq!(joist_max_span(LumberSize::L2x8, JoistSpacing::Oc16), Some(12.5));
        assert_eq!(joist_max_span(LumberSize::L2x12, JoistSpacing::Oc12), Some(21.5));
        assert_eq!(joist_max_span(LumberSize::L4x4, JoistSpacing::Oc16), None);
    }

    #[test]
    fn test_joist_spans_decrease_with_spacing() {
        for size in LumberSize::DIMENSION_2X {
            let s12 = joist_max_span(size, JoistSpacing::Oc12).unwrap();
            let s16 = joist_max_span(size, JoistSpacing::Oc16).unwrap();
            let s24 = joist_max_span(size, JoistSpacing::Oc24).unwrap();
            assert!(s12 > s16 && s16 > s24, "{size}");
        }
    }

    #[test]
    fn test_beam_spans() {
        let b = BeamDesignation::doubled(LumberSize::L2x12);
        assert_eq!(beam_max_span(b, JoistSpanCategory::Upto10), Some(8.5));
        assert_eq!(beam_max_span(b, JoistSpanCategory::Upto12), Some(7.5));

        let solid = BeamDesignation::solid(LumberSize::L4x8);
        assert_eq!(beam_max_span(solid, JoistSpanCategory::Upto6), Some(7.0));

        // Not tabulated
        assert_eq!(beam_max_span(BeamDesignation::solid(LumberSize::L2x8), JoistSpanCategory::Upto6), None);
        assert_eq!(beam_max_span(BeamDesignation::doubled(LumberSize::L4x8), JoistSpanCategory::Upto6), None);
    }

    #[test]
    fn test_category_round_up() {
        assert_eq!(JoistSpanCategory::from_span(4.0), JoistSpanCategory::Upto6);
        assert_eq!(JoistSpanCategory::from_span(6.0), JoistSpanCategory::Upto6);
        assert_eq!(JoistSpanCategory::from_span(6.01), JoistSpanCategory::Upto8);
        assert_eq!(JoistSpanCategory::from_span(10.0), JoistSpanCategory::Upto10);
        assert_eq!(JoistSpanCategory::from_span(16.0), JoistSpanCategory::Upto12);
    }

    #[test]
    fn test_post_limits() {
        assert_eq!(post_height_limit(LumberSize::L4x4), Some(8.0));
        assert_eq!(post_height_limit(LumberSize::L6x6), Some(20.0));
        assert_eq!(post_height_limit(LumberSize::L2x6), None);
    }

    #[test]
    fn test_spacing_decode() {
        assert_eq!(serde_json::from_str::<JoistSpacing>("24").unwrap(), JoistSpacing::Oc24);
        assert!(serde_json::from_str::<JoistSpacing>("18").is_err());
        assert_eq!(serde_json::to_string(&JoistSpacing::Oc16).unwrap(), "16");
        assert!((JoistSpacing::Oc16.feet() - 4.0 / 3.0).abs() < 1e-12);
    }
}
