//! Template system for the generated C files.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! - `{{file_name}}`: module basename (header and source templates)
//! - `{{enum_body}}` / `{{array_body}}`: converter output
//! - `{{total_bytes}}`: storage cost shown in the array comment
//! - `{{enum_block}}` / `{{array_block}}`: rendered enum and array skeletons
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;
