//! # Sizing Calculations
//!
//! The size selectors and the load and geometry calculations that feed them.
//! Each is a pure function of its arguments:
//!
//! - [`joist`] - smallest joist for a span at a spacing
//! - [`beam`] - smallest doubled beam for a post-to-post span
//! - [`post`] - smallest post for a height (soft limit)
//! - [`footing`] - pier diameter from tributary load and soil bearing
//! - [`framing`] - cantilever, spans, post spacing, elevation stack
//!
//! Selectors that can fail return [`DeckResult`](crate::errors::DeckResult);
//! the post selector never fails and flags over-height posts instead.

pub mod beam;
pub mod footing;
pub mod framing;
pub mod joist;
pub mod post;

pub use beam::{select_beam_size, BeamSelection};
pub use footing::{size_footing, FootingDesign};
pub use framing::{plan_spans, post_spacing, Elevations, PostSpacing, SpanPlan};
pub use joist::{select_joist_size, JoistSelection};
pub use post::{select_post_size, PostSelection};
