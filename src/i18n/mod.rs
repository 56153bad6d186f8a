// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language codes and display names.
//!
//! Catalogs are named after their language code: either a bare ISO 639-1
//! code (`cs`) or a region-qualified one (`en_US`). Display names are looked
//! up by the *base* code, so `en_US` shows up as "English".
//!
//! ## Lookup rule
//!
//! | Code    | Lookup key |
//! |---------|------------|
//! | `cs`    | `cs`       |
//! | `en_US` | `en`       |
//! | `sr@latin` | `sr@latin` |
//!
//! Only the third character matters: when it is `_`, the first two
//! characters form the key. Anything else is looked up verbatim.

mod code;
mod names;

pub use code::{is_language_code, lookup_key};
pub use names::LanguageNames;
