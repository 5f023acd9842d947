//! # Error Types
//!
//! Structured error types for deck_core. A failed sizing step never panics or
//! aborts the caller; the assembler records the error into the structure's
//! `errors` list and keeps the typed value on `DeckStructure::failure`.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::errors::{DeckError, DeckResult};
//!
//! fn validate_depth(depth_ft: f64) -> DeckResult<()> {
//!     if depth_ft <= 0.0 {
//!         return Err(DeckError::invalid_input(
//!             "depth_ft",
//!             depth_ft.to_string(),
//!             "Depth must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_depth(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for deck_core operations
pub type DeckResult<T> = Result<T, DeckError>;

/// The framing member a span failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    Joist,
    Beam,
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MemberKind::Joist => "Joist",
            MemberKind::Beam => "Beam",
        };
        write!(f, "{}", name)
    }
}

/// Structured error type for deck generation.
///
/// `SpanExceeded` and `CantileverExceeded` are the two blocking code
/// violations. `InvalidInput` covers values that cannot be decoded or that
/// break the positivity constraints of a site description.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DeckError {
    /// No catalog size reaches the required span
    #[error("{member} span {span_ft:.1}' exceeds maximum {limit_ft:.1}' {context}")]
    SpanExceeded {
        member: MemberKind,
        span_ft: f64,
        limit_ft: f64,
        context: String,
    },

    /// Cantilever beyond the allowed fraction of deck depth
    #[error("Cantilever {cantilever_ft:.1}' exceeds maximum {max_cantilever_ft:.1}' ({ratio_pct:.0}% of {depth_ft:.1}' depth)")]
    CantileverExceeded {
        cantilever_ft: f64,
        max_cantilever_ft: f64,
        ratio_pct: f64,
        depth_ft: f64,
    },

    /// An input value is invalid (out of range, unknown variant, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl DeckError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        DeckError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SpanExceeded error
    pub fn span_exceeded(member: MemberKind, span_ft: f64, limit_ft: f64, context: impl Into<String>) -> Self {
        DeckError::SpanExceeded {
            member,
            span_ft,
            limit_ft,
            context: context.into(),
        }
    }

    /// Check if this is a prescriptive code violation rather than bad input
    pub fn is_code_violation(&self) -> bool {
        matches!(
            self,
            DeckError::SpanExceeded { .. } | DeckError::CantileverExceeded { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DeckError::SpanExceeded { .. } => "SPAN_EXCEEDED",
            DeckError::CantileverExceeded { .. } => "CANTILEVER_EXCEEDED",
            DeckError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}
