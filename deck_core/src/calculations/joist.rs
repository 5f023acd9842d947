//! # Joist Size Selection
//!
//! Picks the smallest 2x joist whose tabulated span at the chosen spacing
//! covers the required span.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::calculations::joist::select_joist_size;
//! use deck_core::materials::LumberSize;
//! use deck_core::span_tables::JoistSpacing;
//!
//! // 2x6 @ 16" reaches 9.5', 2x8 @ 16" reaches 12.5'
//! let joist = select_joist_size(10.0, JoistSpacing::Oc16).unwrap();
//! assert_eq!(joist.size, LumberSize::L2x8);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult, MemberKind};
use crate::materials::LumberSize;
use crate::span_tables::{joist_max_span, JoistSpacing};

/// Selected joist size and the table value that admitted it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoistSelection {
    pub size: LumberSize,
    pub spacing: JoistSpacing,
    /// Required span (ft)
    pub span_ft: f64,
    /// Tabulated maximum for the selected size (ft)
    pub max_span_ft: f64,
}

/// Largest span any catalog joist reaches at this spacing (ft).
pub fn max_joist_span(spacing: JoistSpacing) -> f64 {
    LumberSize::DIMENSION_2X
        .iter()
        .filter_map(|&size| joist_max_span(size, spacing))
        .fold(0.0, f64::max)
}

/// Select the minimum joist size for a span and spacing.
///
/// # Errors
///
/// `SpanExceeded` naming the required span and the best achievable span at
/// this spacing when even a 2x12 falls short.
pub fn select_joist_size(span_ft: f64, spacing: JoistSpacing) -> DeckResult<JoistSelection> {
    for size in LumberSize::DIMENSION_2X {
        let Some(max_span_ft) = joist_max_span(size, spacing) else {
            continue;
        };
        if max_span_ft >= span_ft {
            return Ok(JoistSelection {
                size,
                spacing,
                span_ft,
                max_span_ft,
            });
        }
    }

    Err(DeckError::span_exceeded(
        MemberKind::Joist,
        span_ft,
        max_joist_span(spacing),
        format!("for any size at {}", spacing),
    ))
}
