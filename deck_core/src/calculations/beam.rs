//! # Beam Size Selection
//!
//! Picks the smallest doubled 2x beam whose tabulated span, in the column for
//! the joist span it carries, covers the post-to-post span.
//!
//! Only doubled configurations are tried. The table also lists solid 4x
//! beams with identical spans; they are never selected.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::calculations::beam::select_beam_size;
//! use deck_core::materials::LumberSize;
//!
//! // 8' between posts carrying 10' joists -> 2-2x12 (8.5')
//! let beam = select_beam_size(8.0, 10.0).unwrap();
//! assert_eq!(beam.designation.size, LumberSize::L2x12);
//! assert_eq!(beam.designation.to_string(), "2-2x12");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult, MemberKind};
use crate::materials::{BeamDesignation, LumberSize};
use crate::span_tables::{beam_max_span, JoistSpanCategory};

/// Selected beam and the table cell that admitted it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSelection {
    pub designation: BeamDesignation,
    pub category: JoistSpanCategory,
    /// Post-to-post span (ft)
    pub span_ft: f64,
    /// Tabulated maximum for the selected beam (ft)
    pub max_span_ft: f64,
}

/// Select the minimum doubled beam for a beam span and the joist span it
/// supports.
///
/// # Errors
///
/// `SpanExceeded` when even a 2-2x12 falls short in this joist category. More
/// posts (a shorter beam span) is the usual remedy.
pub fn select_beam_size(beam_span_ft: f64, joist_span_ft: f64) -> DeckResult<BeamSelection> {
    let category = JoistSpanCategory::from_span(joist_span_ft);

    let mut best_ft: f64 = 0.0;
    for size in LumberSize::DIMENSION_2X {
        let designation = BeamDesignation::doubled(size);
        let Some(max_span_ft) = beam_max_span(designation, category) else {
            continue;
        };
        if max_span_ft >= beam_span_ft {
            return Ok(BeamSelection {
                designation,
                category,
                span_ft: beam_span_ft,
                max_span_ft,
            });
        }
        best_ft = best_ft.max(max_span_ft);
    }

    Err(DeckError::span_exceeded(
        MemberKind::Beam,
        beam_span_ft,
        best_ft,
        format!(
            "for joist span category {}'. Consider adding intermediate posts.",
            category
        ),
    ))
}
