//! Barcode identity normalization for a product-scanning pipeline.
//! - Validates GTIN check digits (EAN-8 / UPC-A / EAN-13 / GTIN-14)
//! - Projects every accepted length onto one canonical 13-digit key
//! - Total over arbitrary input: camera noise and pasted text never panic
//!
//! Validation and canonicalization are independent: `is_valid_barcode` only
//! judges, `normalize_to_canonical13` only reshapes. `resolve_scan` chains
//! them for callers that must not persist an unvalidated key.

mod canonical;
mod check_digit;
mod scan;

// ======== Public API ========

pub use canonical::{
    canonicalize, normalize_to_canonical13, Canonical, Gtin13, NotCanonical, CANONICAL_LEN,
};
pub use check_digit::{has_valid_check_digit, is_valid_barcode, is_well_formed_length};
pub use scan::{resolve_scan, Rejection};
