//! Identifier sanitizer: raw UI string to `STRING_<NAME>` enum constant.
//!
//! Strings are handled as raw bytes. The rules are deliberately narrow:
//! spaces and hyphens become underscores, the bytes in [`FORBIDDEN_CHARS`] are
//! deleted, and everything else passes through untouched. Punctuation such as
//! `.` or `'` therefore ends up in the identifier, and two different strings
//! can map to the same name. Neither case is rejected here.

/// Bytes dropped from the identifier with no replacement.
pub const FORBIDDEN_CHARS: &[u8] = b"!*";

/// Prefix shared by every generated enum constant.
pub const IDENTIFIER_PREFIX: &[u8] = b"STRING_";

/// Reduce a raw string to an identifier fragment. Case is left as-is.
pub fn sanitize(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .filter(|b| !FORBIDDEN_CHARS.contains(b))
        .map(|&b| match b {
            b' ' | b'-' => b'_',
            other => other,
        })
        .collect()
}

/// Full enum constant name for `raw`: `STRING_` plus the fragment, upper-cased.
///
/// Upper-casing is ASCII-only; bytes above 0x7f are copied unchanged.
pub fn enum_identifier(raw: &[u8]) -> Vec<u8> {
    let mut ident = IDENTIFIER_PREFIX.to_vec();
    ident.extend(sanitize(raw));
    ident.make_ascii_uppercase();
    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifier_only_changes_case() {
        assert_eq!(enum_identifier(b"Volume_2"), b"STRING_VOLUME_2");
        assert_eq!(enum_identifier(b"OK"), b"STRING_OK");
    }

    #[test]
    fn test_spaces_and_hyphens_become_underscores() {
        assert_eq!(sanitize(b"hello-world two"), b"hello_world_two");
        assert_eq!(enum_identifier(b"hello-world two"), b"STRING_HELLO_WORLD_TWO");
    }

    #[test]
    fn test_forbidden_chars_are_deleted() {
        assert_eq!(sanitize(b"go!fast*"), b"gofast");
        assert_eq!(enum_identifier(b"go!fast*"), b"STRING_GOFAST");
        assert_eq!(enum_identifier(b"TEST!*"), b"STRING_TEST");
    }

    #[test]
    fn test_empty_string_yields_bare_prefix() {
        assert_eq!(enum_identifier(b""), b"STRING_");
    }

    #[test]
    fn test_other_punctuation_passes_through() {
        assert_eq!(enum_identifier(b"v1.0"), b"STRING_V1.0");
        assert_eq!(enum_identifier(b"don't"), b"STRING_DON'T");
    }

    #[test]
    fn test_leading_digit_is_not_rejected() {
        assert_eq!(sanitize(b"3D"), b"3D");
        assert_eq!(enum_identifier(b"3D"), b"STRING_3D");
    }

    #[test]
    fn test_distinct_strings_can_collide() {
        assert_eq!(enum_identifier(b"VU-HORIZ"), enum_identifier(b"vu horiz"));
        assert_eq!(enum_identifier(b"Stop!"), enum_identifier(b"stop"));
    }

    #[test]
    fn test_uppercase_is_ascii_only() {
        assert_eq!(enum_identifier("café".as_bytes()), "STRING_CAFé".as_bytes());
        assert_eq!(enum_identifier(b"Lautst\xe4rke"), b"STRING_LAUTST\xe4RKE");
    }
}
