//! # mathspan
//!
//! Extraction and rendering of `$$`-delimited math segments embedded in
//! otherwise plain text.
//!
//! ## Features
//!
//! - **Two-phase pipeline**: delimiter scanning and pairwise segment
//!   splitting are separate, independently testable steps
//! - **Pluggable typesetting**: math segments render through any
//!   [`Typesetter`]; the default is backed by mitex (LaTeX math → Typst)
//! - **Never fails**: malformed or unpaired markup degrades to literal text
//!   instead of raising
//! - **Diagnostics**: authoring mistakes the renderer forgives can still be
//!   reported to the user
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ```rust
//! use mathspan::{contains_math, render_math_text};
//!
//! // Math-bearing text renders each $$...$$ segment in place
//! let output = render_math_text("Area is $$x^2$$ units");
//! assert!(output.is_some());
//!
//! // Plain text is reported as such; callers display it unchanged
//! assert!(render_math_text("no math here").is_none());
//! assert!(!contains_math("no math here"));
//! ```
//!
//! A custom typesetter is just a function:
//!
//! ```rust
//! use mathspan::SegmentRenderer;
//!
//! let renderer = SegmentRenderer::new(|expr: &str| format!("<math>{}</math>", expr));
//! let outcome = renderer.render(Some("so $$e=mc^2$$."), true);
//! assert_eq!(outcome.output.as_deref(), Some("so <math>e=mc^2</math>."));
//! ```

/// Core scanning and rendering modules
pub mod core;

/// Typesetter boundary - trait and mitex-backed implementation
pub mod typeset;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core pipeline
pub use core::renderer::{RenderOutcome, SegmentRenderer};
pub use core::scanner::{scan_delimiters, DELIMITER};
pub use core::segment::{split_segments, Segment};

// Re-export the typesetter boundary
pub use typeset::{MitexTypesetter, Typesetter};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{MathspanError, MathspanResult};

/// Check whether `input` carries any math markup at all.
///
/// True as soon as one delimiter token is present, paired or not.
pub fn contains_math(input: &str) -> bool {
    !scan_delimiters(input).is_empty()
}

/// Render every paired math segment of `input` with the default mitex
/// typesetter.
///
/// Returns `None` when the input carries no renderable markup (no delimiter
/// tokens, or a single unpaired one); callers fall back to displaying the
/// raw text. See [`SegmentRenderer::render`] for the full contract.
pub fn render_math_text(input: &str) -> Option<String> {
    SegmentRenderer::new(MitexTypesetter::new())
        .render(Some(input), true)
        .into_output()
}

/// Render every paired math segment of `input` with a caller-supplied
/// typesetter.
pub fn render_math_text_with<T: Typesetter>(input: &str, typesetter: T) -> Option<String> {
    SegmentRenderer::new(typesetter)
        .render(Some(input), true)
        .into_output()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_math() {
        assert!(contains_math("$$x$$"));
        assert!(contains_math("half $$ open"));
        assert!(!contains_math("plain"));
        assert!(!contains_math(""));
        assert!(!contains_math("single $ dollar"));
    }

    #[test]
    fn test_render_math_text_basic() {
        let output = render_math_text("Area is $$x^2$$ units").unwrap();
        assert!(output.starts_with("Area is "));
        assert!(output.ends_with(" units"));
        assert!(output.contains('x') && output.contains('2'));
        // Delimiters never leak into the output
        assert!(!output.contains("$$"));
    }

    #[test]
    fn test_render_math_text_plain_input() {
        assert_eq!(render_math_text("no math here"), None);
    }

    #[test]
    fn test_render_math_text_unpaired_input() {
        assert_eq!(render_math_text("half $$ open"), None);
    }

    #[test]
    fn test_render_math_text_with_custom_typesetter() {
        let output = render_math_text_with("$$a$$ and $$b$$", |expr: &str| format!("[{}]", expr));
        assert_eq!(output.as_deref(), Some("[a] and [b]"));
    }

    #[test]
    fn test_render_math_text_greek() {
        let output = render_math_text(r"let $$\alpha$$ vary").unwrap();
        assert!(output.contains("alpha") || output.contains("α"));
    }
}
