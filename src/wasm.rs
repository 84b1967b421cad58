//! WASM bindings for mathspan
//!
//! This module exposes the segment renderer to JavaScript hosts. The browser
//! is the display target: it receives the rendered string (or `null` meaning
//! "show the raw text") and decides where to put it.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Render result with metadata, mirroring the library's `(ok, output)` pair
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct RenderResult {
    /// Whether the input was renderable
    pub ok: bool,
    /// The rendered string, absent when there is nothing to display
    pub output: Option<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render every paired `$$...$$` segment of `input`.
///
/// # Returns
/// The reassembled string, or `null` when the input carries no renderable
/// markup and should be displayed as-is.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderMathText")]
pub fn render_math_text_wasm(input: &str) -> Option<String> {
    crate::render_math_text(input)
}

/// Check whether `input` carries any math markup.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "containsMath")]
pub fn contains_math_wasm(input: &str) -> bool {
    crate::contains_math(input)
}

/// Render with the full outcome exposed as `{ ok, output }`.
///
/// # Arguments
/// * `input` - raw text, possibly carrying `$$...$$` segments
/// * `should_parse` - false to only probe renderability without building output
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderMathTextDetailed")]
pub fn render_math_text_detailed(input: &str, should_parse: bool) -> JsValue {
    let outcome = crate::SegmentRenderer::new(crate::MitexTypesetter::new())
        .render(Some(input), should_parse);
    let result = RenderResult {
        ok: outcome.ok,
        output: outcome.output,
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Report markup problems the renderer forgives, one message per line.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkMarkup")]
pub fn check_markup_wasm(input: &str) -> Option<String> {
    let diagnostics = crate::diagnostics::check_markup(input);
    if diagnostics.is_empty() {
        return None;
    }
    Some(crate::diagnostics::format_diagnostics(&diagnostics, false))
}
