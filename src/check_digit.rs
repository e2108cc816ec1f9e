//! GTIN check-digit validation (EAN-8 / UPC-A / EAN-13 / GTIN-14).

/// Structural gate: exactly 8 digits, or exactly 12–14 digits, nothing else.
/// Applied to the raw string as-is; any non-digit byte fails. No arithmetic.
pub fn is_well_formed_length(input: &str) -> bool {
    let len = input.len();
    (len == 8 || (12..=14).contains(&len)) && input.bytes().all(|b| b.is_ascii_digit())
}

/// Validate the declared (last) check digit with the standard GTIN weighting.
///
/// Weights are anchored to the check digit, not the left end: walking the
/// payload from the digit next to the check digit toward the start, positions
/// 0, 2, 4… weigh 3 and the rest weigh 1. That makes the same loop correct for
/// all four GTIN lengths.
///
/// Fails closed on empty or non-digit input, independent of any length gate
/// the caller may have applied.
pub fn has_valid_check_digit(input: &str) -> bool {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits = input.as_bytes();
    let declared = u32::from(digits[digits.len() - 1] - b'0');

    let sum: u32 = digits[..digits.len() - 1]
        .iter()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 0 { d * 3 } else { d }
        })
        .sum();

    declared == (10 - sum % 10) % 10
}

/// Full verdict: recognized length family AND correct check digit.
/// Total over all strings; malformed input returns false, never panics.
pub fn is_valid_barcode(input: &str) -> bool {
    is_well_formed_length(input) && has_valid_check_digit(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_gate_accepts_gtin_families() {
        assert!(is_well_formed_length("96385074")); // 8
        assert!(is_well_formed_length("012345678905")); // 12
        assert!(is_well_formed_length("4006381333931")); // 13
        assert!(is_well_formed_length("10012345678902")); // 14
    }

    #[test]
    fn length_gate_rejects_everything_else() {
        assert!(!is_well_formed_length(""));
        assert!(!is_well_formed_length("1234567")); // 7
        assert!(!is_well_formed_length("123456789")); // 9
        assert!(!is_well_formed_length("12345678901")); // 11
        assert!(!is_well_formed_length("123456789012345")); // 15
        assert!(!is_well_formed_length("4006381a33931")); // letter inside
        assert!(!is_well_formed_length(" 4006381333931")); // no trimming here
    }

    #[test]
    fn check_digit_valid_across_lengths() {
        assert!(has_valid_check_digit("96385074")); // EAN-8
        assert!(has_valid_check_digit("012345678905")); // UPC-A
        assert!(has_valid_check_digit("4006381333931")); // EAN-13
        assert!(has_valid_check_digit("10012345678902")); // GTIN-14
    }

    #[test]
    fn check_digit_fails_closed_on_garbage() {
        assert!(!has_valid_check_digit(""));
        assert!(!has_valid_check_digit("40063813339x1"));
        assert!(!has_valid_check_digit("٤٠٠٦٣٨١٣٣٣٩٣١")); // non-ASCII digits
    }

    #[test]
    fn corrupted_check_digit_always_detected() {
        // mod-10 catches every single-digit substitution in the last position
        let valid = "4006381333931";
        for d in b'0'..=b'9' {
            let mut corrupted = valid[..12].to_string();
            corrupted.push(char::from(d));
            assert_eq!(is_valid_barcode(&corrupted), d == b'1', "{corrupted}");
        }
    }

    #[test]
    fn valid_barcode_requires_both_gates() {
        // correct check digit but unrecognized length (9 digits)
        assert!(has_valid_check_digit("123456784"));
        assert!(!is_valid_barcode("123456784"));
        // recognized length, wrong check digit
        assert!(!is_valid_barcode("4006381333930"));
    }
}
