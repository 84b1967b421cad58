//! Typesetting of extracted math expressions
//!
//! The renderer is generic over a [`Typesetter`]; the default implementation
//! hands each expression to mitex, which converts LaTeX math into Typst
//! markup. Typesetters never fail: a malformed expression degrades to a
//! best-effort fallback string instead of aborting the surrounding render.

use mitex::convert_math;

/// A capability that turns one math expression into a display string.
pub trait Typesetter {
    /// Typeset `expression` (without its delimiters).
    ///
    /// Must not panic on malformed input; implementations return a fallback
    /// string instead. There is no strict mode at this boundary, so callers
    /// that want validation inspect the returned string themselves.
    fn render(&self, expression: &str) -> String;
}

/// Any `Fn(&str) -> String` is a typesetter, which keeps tests and embedders
/// free to inject deterministic behavior.
impl<F> Typesetter for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, expression: &str) -> String {
        self(expression)
    }
}

/// mitex-backed typesetter producing Typst math markup.
///
/// Conversion errors fall back to the raw expression, so a bad formula shows
/// up as its own source text rather than failing the whole render.
#[derive(Debug, Clone, Copy, Default)]
pub struct MitexTypesetter;

impl MitexTypesetter {
    pub fn new() -> Self {
        Self
    }
}

impl Typesetter for MitexTypesetter {
    fn render(&self, expression: &str) -> String {
        match convert_math(expression, None) {
            Ok(typst) => typst,
            Err(_) => expression.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mitex_renders_simple_expression() {
        let result = MitexTypesetter::new().render(r"\alpha + \beta");
        assert!(result.contains("alpha") || result.contains("α"));
        assert!(result.contains("beta") || result.contains("β"));
    }

    #[test]
    fn test_mitex_renders_superscript() {
        let result = MitexTypesetter::new().render("x^2");
        assert!(result.contains('x') && result.contains('2'));
    }

    #[test]
    fn test_malformed_expression_falls_back_to_source() {
        // Unbalanced group; whatever mitex does, the call must return a
        // string rather than panic
        let expression = r"\frac{1}{";
        let result = MitexTypesetter::new().render(expression);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_closure_typesetter() {
        let upper = |expression: &str| expression.to_uppercase();
        assert_eq!(upper.render("x"), "X");
    }
}
