//! Common validation utilities

/// Field-level validators shared by the domain and API layers
pub mod validators {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

    static EMAIL_REGEX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

    static TIME_OF_DAY_REGEX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").unwrap());

    /// Check if a string is not blank
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string's character count is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Person names contain ASCII letters and spaces only
    pub fn is_valid_name(name: &str) -> bool {
        let trimmed = name.trim();
        !trimmed.is_empty() && NAME_REGEX.is_match(trimmed)
    }

    /// Trim and lower-case an email address
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Basic shape check: `local@domain.tld` without whitespace
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email.trim())
    }

    /// 24-hour `H:MM` or `HH:MM`
    pub fn is_valid_time_of_day(value: &str) -> bool {
        TIME_OF_DAY_REGEX.is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_names() {
        assert!(is_valid_name("Asha Rai"));
        assert!(is_valid_name("  Bob  "));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("O'Neil"));
        assert!(!is_valid_name("   "));
    }

    #[test]
    fn test_emails() {
        assert_eq!(normalize_email("  Asha@Example.COM "), "asha@example.com");
        assert!(is_valid_email("asha@example.com"));
        assert!(!is_valid_email("asha@example"));
        assert!(!is_valid_email("asha example@x.com"));
    }

    #[test]
    fn test_time_of_day() {
        assert!(is_valid_time_of_day("06:00"));
        assert!(is_valid_time_of_day("9:30"));
        assert!(is_valid_time_of_day("23:59"));
        assert!(!is_valid_time_of_day("24:00"));
        assert!(!is_valid_time_of_day("12:60"));
    }

    #[test]
    fn test_length_between_counts_chars() {
        assert!(length_between("ñandú", 5, 5));
        assert!(!length_between("abc", 4, 10));
    }
}
