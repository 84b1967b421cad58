//! Core scanning and rendering modules
//!
//! The pipeline has two phases plus a driver:
//! - `scanner`: locate delimiter offsets in a single left-to-right pass
//! - `segment`: fold the offsets pairwise into literal/math segments
//! - `renderer`: typeset math segments and reassemble the output string

pub mod renderer;
pub mod scanner;
pub mod segment;

// Re-export main types and functions
pub use renderer::{RenderOutcome, SegmentRenderer};
pub use scanner::{scan_delimiters, DELIMITER};
pub use segment::{split_segments, Segment};
