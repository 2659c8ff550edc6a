//! Handlebars-based template renderer for the generated C files.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled, so a
//! `{{variable}}` missing from the data context is an error rather than an empty
//! string. HTML escaping is switched off: the output is C source and raw strings
//! must land in it byte for byte.
//!
//! Input strings are arbitrary bytes, not necessarily UTF-8. [`bytes_to_text`]
//! maps each byte to the char with the same value (U+0000..=U+00FF) so the bytes
//! can travel through Handlebars, and [`TemplateRenderer::render_bytes`] maps the
//! rendered text back. The templates themselves are ASCII, so the round trip is
//! exact.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{embedded, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "enum_body": bytes_to_text(b"    STRING_OK,  /**< OK */\n") });
//! let output: Vec<u8> = renderer.render_bytes(embedded::ENUM_BLOCK, &data)?;
//! ```

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{Result, StrincifyError};

/// Template renderer using Handlebars for the header and source files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode on and escaping off.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| StrincifyError::TemplateRender(e.to_string()))
    }

    /// Render a template whose data came from [`bytes_to_text`] and return raw bytes.
    pub fn render_bytes(&self, template: &str, data: &Value) -> Result<Vec<u8>> {
        text_to_bytes(&self.render(template, data)?)
    }
}

/// Map each byte to the char of the same value.
pub fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Inverse of [`bytes_to_text`]. Fails on chars above U+00FF.
pub fn text_to_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| {
            u8::try_from(c).map_err(|_| {
                StrincifyError::TemplateRender(format!("non-byte character {c:?} in output"))
            })
        })
        .collect()
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
