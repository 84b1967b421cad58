//! The segment renderer: scan, split, typeset, reassemble
//!
//! Owns the end-to-end contract over raw text. All failure states travel
//! through [`RenderOutcome`]; nothing in this module panics or returns `Err`.

use super::scanner::scan_delimiters;
use super::segment::{split_segments, Segment};
use crate::typeset::Typesetter;

/// Result of a render call: the `(ok, output)` pair.
///
/// `ok == false` always carries `output == None` and means the input is not
/// renderable math-bearing text; callers fall back to displaying the raw
/// text. `ok == true` with `output == None` means there was nothing to do
/// (empty input, or a probe call that only asked for renderability).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub ok: bool,
    pub output: Option<String>,
}

impl RenderOutcome {
    /// Empty or absent input: nothing to render, not an error.
    fn nothing_to_render() -> Self {
        Self {
            ok: true,
            output: None,
        }
    }

    /// No delimiter tokens at all: not a math-bearing string.
    fn not_math_bearing() -> Self {
        Self {
            ok: false,
            output: None,
        }
    }

    /// Probe call answered: the input carries math markup.
    fn renderable() -> Self {
        Self {
            ok: true,
            output: None,
        }
    }

    /// Too few tokens to form any pair.
    fn unpaired() -> Self {
        Self {
            ok: false,
            output: None,
        }
    }

    fn rendered(output: String) -> Self {
        Self {
            ok: true,
            output: Some(output),
        }
    }

    /// Consume the outcome, keeping only the output string.
    pub fn into_output(self) -> Option<String> {
        self.output
    }
}

/// Renders `$$`-delimited math segments embedded in plain text.
///
/// Generic over the [`Typesetter`] used for the math segments; see
/// [`crate::typeset::MitexTypesetter`] for the default. The renderer holds no
/// state between calls and may be shared freely across threads when `T` is
/// `Sync`.
#[derive(Debug, Clone, Default)]
pub struct SegmentRenderer<T> {
    typesetter: T,
}

impl<T: Typesetter> SegmentRenderer<T> {
    pub fn new(typesetter: T) -> Self {
        Self { typesetter }
    }

    /// Render every paired math segment of `input`.
    ///
    /// With `should_parse == false` the call only probes: it reports through
    /// `ok` whether the input carries any math markup and never builds
    /// output. With `should_parse == true` it renders each math expression
    /// through the typesetter and reassembles the surrounding literal text
    /// in order.
    ///
    /// Malformed markup never fails the call: a lone delimiter yields
    /// `ok == false`, and a dangling trailing delimiter after at least one
    /// complete pair is folded verbatim into the literal tail.
    pub fn render(&self, input: Option<&str>, should_parse: bool) -> RenderOutcome {
        let input = match input {
            Some(text) if !text.is_empty() => text,
            _ => return RenderOutcome::nothing_to_render(),
        };

        let positions = scan_delimiters(input);
        if positions.is_empty() {
            return RenderOutcome::not_math_bearing();
        }
        if !should_parse {
            return RenderOutcome::renderable();
        }
        if positions.len() < 2 {
            return RenderOutcome::unpaired();
        }

        let mut output = String::new();
        for segment in split_segments(input, &positions) {
            match segment {
                Segment::Literal(text) => output.push_str(&text),
                Segment::Math(expression) => output.push_str(&self.typesetter.render(&expression)),
            }
        }

        RenderOutcome::rendered(output)
    }
}
