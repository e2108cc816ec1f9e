//! Canonical GTIN-13 product key and the projection that produces it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical key width in digits.
pub const CANONICAL_LEN: usize = 13;

/// A canonical 13-digit product key.
///
/// Invariant: always exactly 13 ASCII digits. Only `canonicalize` and the
/// fallible parsers construct one, so a `Gtin13` in hand is already in
/// storage shape. Serde goes through the same parser, so deserializing a
/// malformed key from a service payload fails instead of smuggling it in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gtin13(String);

/// A string offered as an already-canonical key that is not one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("not a canonical 13-digit key: {0:?}")]
pub struct NotCanonical(pub String);

impl Gtin13 {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Gtin13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Gtin13 {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Gtin13 {
    type Err = NotCanonical;

    /// Accepts only what `canonicalize` already emits: exactly 13 digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == CANONICAL_LEN && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Gtin13(s.to_owned()))
        } else {
            Err(NotCanonical(s.to_owned()))
        }
    }
}

impl TryFrom<String> for Gtin13 {
    type Error = NotCanonical;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Gtin13> for String {
    fn from(key: Gtin13) -> Self {
        key.0
    }
}

/// Result of projecting raw input into canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    pub gtin13: Gtin13,
    /// True when the stripped input held more than 13 digits and the leading
    /// ones were dropped. Distinguishes a GTIN-14 losing its indicator digit
    /// from an overlong string squeezed into shape (callers pick a policy).
    pub truncated: bool,
}

/// Project any string onto a canonical 13-digit key.
///
/// Strips every non-digit (camera decoders and paste buffers carry
/// separators and line breaks), then left-pads with zeros to 13, or keeps the
/// rightmost 13 when longer. Never fails; this is a best-effort projection,
/// not a validator — pair with `is_valid_barcode` or use `resolve_scan` when
/// the input's provenance is untrusted.
pub fn canonicalize(raw: &str) -> Canonical {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.len() > CANONICAL_LEN {
        let cut = digits.len() - CANONICAL_LEN;
        Canonical {
            gtin13: Gtin13(digits[cut..].to_owned()),
            truncated: true,
        }
    } else {
        Canonical {
            gtin13: Gtin13(format!("{digits:0>width$}", width = CANONICAL_LEN)),
            truncated: false,
        }
    }
}

/// Plain-string form of `canonicalize`. Always exactly 13 ASCII digits.
pub fn normalize_to_canonical13(raw: &str) -> String {
    canonicalize(raw).gtin13.into_string()
}
