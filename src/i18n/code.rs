// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language code helpers.

use regex::Regex;
use std::sync::OnceLock;

/// Key used to find a code's display name.
///
/// # Examples
/// ```
/// assert_eq!(transtat::i18n::lookup_key("en_US"), "en");
/// assert_eq!(transtat::i18n::lookup_key("cs"), "cs");
/// ```
pub fn lookup_key(code: &str) -> &str {
    // Byte 2 being ASCII `_` makes index 2 a char boundary.
    if code.len() > 2 && code.as_bytes()[2] == b'_' {
        &code[..2]
    } else {
        code
    }
}

/// Whether `code` looks like a gettext catalog language code: two or three
/// lowercase letters, optionally followed by `_XX` and an `@modifier`.
pub fn is_language_code(code: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(r"^[a-z]{2,3}(_[A-Z]{2})?(@[a-z]+)?$")
                .expect("language code pattern is valid")
        })
        .is_match(code)
}
