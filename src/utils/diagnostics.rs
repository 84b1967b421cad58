//! Markup diagnostics for delimited math text
//!
//! Rendering is deliberately forgiving: a dangling trailing `$$` is folded
//! into literal text instead of failing the render. That can hide genuine
//! authoring mistakes, so this module reports them separately for tools that
//! want to surface them. Diagnostics never change render output.

use std::fmt;

use crate::core::scanner::{scan_delimiters, DELIMITER};

/// Severity of a markup diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// Renderable, but probably not what the author meant
    Warning,
    /// Nothing renderable will come out of this markup
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single issue found in the markup
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    /// Byte offset of the offending token, when there is one
    pub offset: Option<usize>,
}

impl Diagnostic {
    fn warning(message: impl Into<String>, offset: usize) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
            offset: Some(offset),
        }
    }

    fn error(message: impl Into<String>, offset: usize) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
            offset: Some(offset),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{} at offset {}: {}", self.level, offset, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Check `input` for delimiter problems the renderer forgives.
///
/// Reports:
/// - a lone delimiter (nothing renderable) as an error
/// - a dangling trailing delimiter after complete pairs as a warning
/// - an empty expression inside a pair as a warning
///
/// Plain text without any delimiters produces no diagnostics.
pub fn check_markup(input: &str) -> Vec<Diagnostic> {
    let positions = scan_delimiters(input);
    let mut diagnostics = Vec::new();

    if positions.len() == 1 {
        diagnostics.push(Diagnostic::error(
            format!("unpaired '{}' token; nothing will be rendered", DELIMITER),
            positions[0],
        ));
        return diagnostics;
    }

    for pair in positions.chunks_exact(2) {
        if pair[0] + DELIMITER.len() == pair[1] {
            diagnostics.push(Diagnostic::warning("empty math expression", pair[0]));
        }
    }

    if positions.len() >= 3 && positions.len() % 2 == 1 {
        let dangling = positions[positions.len() - 1];
        diagnostics.push(Diagnostic::warning(
            format!(
                "dangling '{}' token; it will be shown as literal text",
                DELIMITER
            ),
            dangling,
        ));
    }

    diagnostics
}

/// Whether any diagnostic in `diagnostics` is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics
        .iter()
        .any(|d| d.level == DiagnosticLevel::Error)
}

/// Format diagnostics for terminal output, one per line.
pub fn format_diagnostics(diagnostics: &[Diagnostic], color: bool) -> String {
    if diagnostics.is_empty() {
        return "no issues found".to_string();
    }

    let mut output = String::new();
    for diagnostic in diagnostics {
        if color {
            let code = match diagnostic.level {
                DiagnosticLevel::Warning => "\x1b[33m",
                DiagnosticLevel::Error => "\x1b[31m",
            };
            output.push_str(code);
        }
        output.push_str(&diagnostic.to_string());
        if color {
            output.push_str("\x1b[0m");
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_clean() {
        assert!(check_markup("no math here").is_empty());
        assert!(check_markup("").is_empty());
    }

    #[test]
    fn test_well_formed_markup_is_clean() {
        assert!(check_markup("a $$x$$ b $$y$$ c").is_empty());
    }

    #[test]
    fn test_lone_delimiter_is_an_error() {
        let diagnostics = check_markup("half $$ open");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, DiagnosticLevel::Error);
        assert_eq!(diagnostics[0].offset, Some(5));
        assert!(has_errors(&diagnostics));
    }

    #[test]
    fn test_dangling_delimiter_is_a_warning() {
        let diagnostics = check_markup("ok $$x$$ trailing $$");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, DiagnosticLevel::Warning);
        assert_eq!(diagnostics[0].offset, Some(18));
        assert!(!has_errors(&diagnostics));
    }

    #[test]
    fn test_empty_expression_is_a_warning() {
        let diagnostics = check_markup("before $$$$ after");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, DiagnosticLevel::Warning);
        assert!(diagnostics[0].message.contains("empty"));
    }

    #[test]
    fn test_format_without_color() {
        let formatted = format_diagnostics(&check_markup("half $$ open"), false);
        assert!(formatted.contains("error at offset 5"));
        assert!(!formatted.contains("\x1b["));
    }

    #[test]
    fn test_format_with_color() {
        let formatted = format_diagnostics(&check_markup("half $$ open"), true);
        assert!(formatted.contains("\x1b[31m"));
    }
}
