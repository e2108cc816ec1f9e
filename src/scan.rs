//! Single entry point for the scanning pipeline.
//!
//! Camera callbacks, keypad entry, and pasted text all feed raw strings; this
//! module sequences strip → length gate → check digit → canonical projection
//! in one call, so callers get either a confirmed key or a reason, and never
//! a canonical-looking string that skipped validation.

use thiserror::Error;
use tracing::debug;

use crate::canonical::{canonicalize, Gtin13};
use crate::check_digit::{has_valid_check_digit, is_well_formed_length};

/// Why scanned or typed input was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    /// Stripped input is not 8, 12, 13, or 14 digits long.
    #[error("expected 8, 12, 13 or 14 digits, got {digits}")]
    UnrecognizedLength { digits: usize },
    /// Recognized length, but the trailing digit disagrees with the mod-10
    /// computation — a mistyped or misread digit.
    #[error("check digit mismatch in {candidate}")]
    CheckDigitMismatch { candidate: String },
}

/// Resolve raw scan/keypad input to a canonical product key.
///
/// Unlike bare `canonicalize`, this rejects anything the GTIN length gate or
/// check digit refuses; only validated input is projected. A valid GTIN-14
/// resolves to its embedded 13-digit key (the leading indicator digit is
/// dropped after validation, never before).
pub fn resolve_scan(raw: &str) -> Result<Gtin13, Rejection> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if !is_well_formed_length(&digits) {
        debug!(digits = digits.len(), "scan rejected: unrecognized length");
        return Err(Rejection::UnrecognizedLength {
            digits: digits.len(),
        });
    }

    if !has_valid_check_digit(&digits) {
        debug!(candidate = %digits, "scan rejected: check digit mismatch");
        return Err(Rejection::CheckDigitMismatch { candidate: digits });
    }

    Ok(canonicalize(&digits).gtin13)
}
