//! Compile-time embedded templates for the generated string table.
//!
//! Each constant loads a template file from `templates/string_table/` via [`include_str!`].
//! The paths are relative to this source file (`crates/strincify-core/src/templates/embedded.rs`).
//!
//! Whitespace in these files is part of the output format: each one starts with
//! a blank line, and the enum block keeps a blank line before `STRING_NUM_IDS`.
//! Do NOT reformat them.

/// `enum _string_table_ids { ... STRING_NUM_IDS };` skeleton around the enum body.
pub const ENUM_BLOCK: &str = include_str!("../../../../templates/string_table/enum.hbs");

/// Byte-count comment and `g_string_table[]` skeleton around the array body.
pub const ARRAY_BLOCK: &str = include_str!("../../../../templates/string_table/array.hbs");

/// `<name>.h`: license preamble, include guard, extern declaration, enum block.
pub const HEADER: &str = include_str!("../../../../templates/string_table/header.h.hbs");

/// `<name>.c`: license preamble, `#include "<name>.h"`, array block.
pub const SOURCE: &str = include_str!("../../../../templates/string_table/source.c.hbs");
