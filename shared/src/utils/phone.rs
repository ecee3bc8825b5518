//! Phone number utilities
//!
//! Members register with a 10 digit local number; no country code is stored.

use once_cell::sync::Lazy;
use regex::Regex;

static LOCAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Strip surrounding whitespace; inner characters are kept so that
/// separators such as `-` still fail validation.
pub fn normalize_phone_number(phone: &str) -> String {
    phone.trim().to_string()
}

/// Check that a phone number is exactly ten ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    LOCAL_PHONE_REGEX.is_match(&normalize_phone_number(phone))
}

/// Mask a phone number for logs (e.g., 98****3210)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 && normalized.is_ascii() {
        format!(
            "{}****{}",
            &normalized[0..2],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone_numbers() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone(" 0123456789 "));
    }

    #[test]
    fn test_invalid_phone_numbers() {
        assert!(!is_valid_phone("987654321"));
        assert!(!is_valid_phone("98765432100"));
        assert!(!is_valid_phone("98765-4321"));
        assert!(!is_valid_phone("+919876543210"));
        assert!(!is_valid_phone("９８７６５４３２１０"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("9876543210"), "98****3210");
        assert_eq!(mask_phone_number("123"), "****");
    }
}
