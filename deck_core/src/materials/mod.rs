//! # Materials
//!
//! The lumber catalog used by every framing member, and the surface finish
//! selections carried through from the site visit.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::materials::{BeamDesignation, LumberSize};
//!
//! let beam = BeamDesignation::doubled(LumberSize::L2x10);
//! assert_eq!(beam.to_string(), "2-2x10");
//! assert_eq!(LumberSize::L2x10.spec().height_in, 9.25);
//! ```

pub mod finishes;
pub mod lumber_sizes;

pub use finishes::{DeckingType, RailingType};
pub use lumber_sizes::{BeamDesignation, LumberSize, LumberSpec, PlyCount};
