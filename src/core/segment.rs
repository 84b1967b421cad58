//! Splitting raw text into literal and math segments
//!
//! The second phase of the pipeline: fold the scanned delimiter offsets
//! pairwise into typed segments. Pairing and tail handling live here so they
//! can be tested without involving a typesetter.

use super::scanner::DELIMITER;

/// A contiguous run of the input: either literal prose, kept verbatim, or a
/// math expression with its delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Math(String),
}

impl Segment {
    /// The segment's text: literal prose as written, or the pre-render math
    /// expression.
    pub fn text(&self) -> &str {
        match self {
            Segment::Literal(text) | Segment::Math(text) => text,
        }
    }

    pub fn is_math(&self) -> bool {
        matches!(self, Segment::Math(_))
    }
}

/// Fold scanned delimiter offsets pairwise into segments.
///
/// Consecutive offsets are consumed two at a time; each pair bounds one math
/// expression. For pair `(open, close)` the literal segment runs from the end
/// of the previously consumed region up to `open`, and the math segment lies
/// strictly between the two tokens. After the last complete pair, any leftover
/// input is appended verbatim as a trailing literal, which also absorbs a
/// dangling unmatched delimiter.
///
/// `positions` must come from [`super::scanner::scan_delimiters`] on the same
/// `input`; empty literal runs between adjacent tokens are skipped.
pub fn split_segments(input: &str, positions: &[usize]) -> Vec<Segment> {
    let token = DELIMITER.len();
    let mut segments = Vec::new();
    let mut cursor = 0;

    for pair in positions.chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        if cursor < open {
            segments.push(Segment::Literal(input[cursor..open].to_string()));
        }
        segments.push(Segment::Math(input[open + token..close].to_string()));
        cursor = close + token;
    }

    if cursor < input.len() {
        segments.push(Segment::Literal(input[cursor..].to_string()));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::scan_delimiters;

    fn split(input: &str) -> Vec<Segment> {
        split_segments(input, &scan_delimiters(input))
    }

    fn literal(text: &str) -> Segment {
        Segment::Literal(text.to_string())
    }

    fn math(expression: &str) -> Segment {
        Segment::Math(expression.to_string())
    }

    #[test]
    fn test_single_pair() {
        assert_eq!(
            split("Area is $$x^2$$ units"),
            vec![literal("Area is "), math("x^2"), literal(" units")]
        );
    }

    #[test]
    fn test_two_pairs() {
        assert_eq!(
            split("$$a$$ and $$b$$"),
            vec![math("a"), literal(" and "), math("b")]
        );
    }

    #[test]
    fn test_no_positions_yields_whole_input_as_tail() {
        assert_eq!(split("no math here"), vec![literal("no math here")]);
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(split("$$$$tail"), vec![math(""), literal("tail")]);
    }

    #[test]
    fn test_adjacent_pairs_skip_empty_literal() {
        assert_eq!(split("$$a$$$$b$$"), vec![math("a"), math("b")]);
    }

    #[test]
    fn test_dangling_delimiter_folds_into_tail() {
        assert_eq!(
            split("ok $$x$$ trailing $$"),
            vec![literal("ok "), math("x"), literal(" trailing $$")]
        );
    }

    #[test]
    fn test_single_delimiter_stays_literal() {
        // One offset forms no pair; everything lands in the tail
        assert_eq!(split("half $$ open"), vec![literal("half $$ open")]);
    }

    #[test]
    fn test_input_ending_at_closing_token() {
        assert_eq!(split("sum: $$a+b$$"), vec![literal("sum: "), math("a+b")]);
    }

    #[test]
    fn test_reconstruction_invariant() {
        // Concatenated segment texts equal the input with the paired
        // delimiter tokens removed, dangling token included in the tail.
        let cases = [
            ("Area is $$x^2$$ units", "Area is x^2 units"),
            ("$$a$$ and $$b$$", "a and b"),
            ("ok $$x$$ trailing $$", "ok x trailing $$"),
            ("plain", "plain"),
            ("$$$$", ""),
        ];
        for (input, expected) in cases {
            let rebuilt: String = split(input).iter().map(Segment::text).collect();
            assert_eq!(rebuilt, expected, "input: {:?}", input);
        }
    }
}
