//! # deck_core - Prescriptive Deck Sizing & Layout Engine
//!
//! `deck_core` turns a deck footprint (width, depth, height, attachment, soil
//! and frost data) into a complete structural model: member sizes chosen from
//! a municipal prescriptive span table, and every footing, post, beam, joist,
//! ledger and rim joist positioned in 3D. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: One pure function from site input to structure
//! - **Table-Driven**: Sizes come from fixed lookup tables, never analysis
//! - **Fail Visibly**: Code violations are recorded on the result, never panics
//!
//! ## Quick Start
//!
//! ```rust
//! use deck_core::{generate_structure, LedgerAttachment, SiteInput};
//!
//! let site = SiteInput::new(16.0, 12.0, 3.0).with_ledger(LedgerAttachment::Direct);
//! let deck = generate_structure(&site);
//!
//! assert!(deck.compliant);
//! assert_eq!(deck.joists.len(), 13);
//!
//! let json = serde_json::to_string_pretty(&deck).unwrap();
//! assert!(json.contains("\"joist_size\": \"2x8\""));
//! ```
//!
//! ## Modules
//!
//! - [`site`] - Site description and ledger attachment
//! - [`settings`] - Design settings (spacing, cantilever policy, loads)
//! - [`span_tables`] - Joist, beam and post lookup tables
//! - [`calculations`] - Size selectors, footing sizing, framing geometry
//! - [`layout`] - Member positioning
//! - [`engine`] - The end-to-end structure assembler
//! - [`structure`] - Output model and material takeoff
//! - [`materials`] - Lumber catalog and finish selections
//! - [`loads`] - Design loads
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod engine;
pub mod errors;
pub mod layout;
pub mod loads;
pub mod materials;
pub mod settings;
pub mod site;
pub mod span_tables;
pub mod structure;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use engine::{generate_structure, generate_structure_with};
pub use errors::{DeckError, DeckResult};
pub use settings::DesignSettings;
pub use site::{LedgerAttachment, SiteInput};
pub use structure::DeckStructure;
