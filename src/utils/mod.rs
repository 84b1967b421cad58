//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Markup diagnostics for authoring errors the renderer forgives
//! - Error types for the I/O boundary

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{check_markup, format_diagnostics, has_errors, Diagnostic, DiagnosticLevel};
pub use error::{MathspanError, MathspanResult};
