//! Edge extraction over the filtered mask.
//!
//! - Sobel gradient computation returning `gx`, `gy` and magnitude.
//! - Canny-style two-threshold extraction: direction-aligned non-maximum
//!   suppression followed by hysteresis linking, producing a binary edge
//!   map of the line-region boundary.
//!
//! The input is the already-binary filtered mask, so edges trace the
//! contour of the segmented line.

pub mod canny;
pub mod grad;

pub use canny::{detect_edges, CannyOptions};
pub use grad::{sobel_gradients, Grad};
