//! # Post Size Selection
//!
//! Picks the smallest post whose height limit covers the unsupported height.
//! A post taller than every limit is not rejected: the largest size is used
//! and the selection is marked for engineering review.

use serde::{Deserialize, Serialize};

use crate::materials::LumberSize;
use crate::span_tables::post_height_limit;

/// Selected post size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostSelection {
    pub size: LumberSize,
    /// Unsupported height, grade to beam bottom (ft)
    pub height_ft: f64,
    /// Height limit of the selected size (ft)
    pub limit_ft: f64,
    /// False when the height is beyond the table and needs an engineer
    pub within_limit: bool,
}

impl PostSelection {
    pub fn needs_engineer_review(&self) -> bool {
        !self.within_limit
    }
}

/// Select the minimum post size for a height.
///
/// ```rust
/// use deck_core::calculations::post::select_post_size;
/// use deck_core::materials::LumberSize;
///
/// assert_eq!(select_post_size(6.0).size, LumberSize::L4x4);
/// assert_eq!(select_post_size(10.0).size, LumberSize::L4x6);
///
/// let tall = select_post_size(24.0);
/// assert_eq!(tall.size, LumberSize::L6x6);
/// assert!(tall.needs_engineer_review());
/// ```
pub fn select_post_size(height_ft: f64) -> PostSelection {
    let mut largest = (LumberSize::L6x6, 0.0);
    for size in LumberSize::POSTS {
        let Some(limit_ft) = post_height_limit(size) else {
            continue;
        };
        if limit_ft >= height_ft {
            return PostSelection {
                size,
                height_ft,
                limit_ft,
                within_limit: true,
            };
        }
        largest = (size, limit_ft);
    }

    PostSelection {
        size: largest.0,
        height_ft,
        limit_ft: largest.1,
        within_limit: false,
    }
}
