use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for national mobile numbers
    /// Optional `+91` or `0` prefix, then ten digits starting with 6-9
    /// - Valid: "9876543210", "+919876543210", "09876543210"
    /// - Invalid: "1234567890", "98765", "+9198765432101", "919876543210"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^(?:\+91|0)?(?:[6-9][0-9]{9})$").unwrap();

    /// Regex for the `YYYY-MM-DD` date shape
    /// Calendar validity is checked separately when parsing.
    /// - Valid: "2000-05-01"
    /// - Invalid: "2000-5-1", "01-05-2000", "2000/05/01"
    pub static ref DATE_REGEX: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("9876543210"));
        assert!(PHONE_REGEX.is_match("+919876543210"));
        assert!(PHONE_REGEX.is_match("09876543210"));
        assert!(PHONE_REGEX.is_match("6000000000"));
        assert!(PHONE_REGEX.is_match("7123456789"));
        assert!(PHONE_REGEX.is_match("8123456789"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("1234567890")); // starts with 1
        assert!(!PHONE_REGEX.is_match("5876543210")); // starts with 5
        assert!(!PHONE_REGEX.is_match("98765")); // too short
        assert!(!PHONE_REGEX.is_match("98765432101")); // too long
        assert!(!PHONE_REGEX.is_match("919876543210")); // prefix without plus
        assert!(!PHONE_REGEX.is_match("+91 9876543210")); // space
        assert!(!PHONE_REGEX.is_match("٩٨٧٦٥٤٣٢١٠")); // non-ASCII digits
        assert!(!PHONE_REGEX.is_match(""));
    }

    #[test]
    fn test_date_regex() {
        assert!(DATE_REGEX.is_match("2000-05-01"));
        assert!(!DATE_REGEX.is_match("2000-5-1"));
        assert!(!DATE_REGEX.is_match("01-05-2000"));
        assert!(!DATE_REGEX.is_match("2000/05/01"));
        assert!(!DATE_REGEX.is_match("2000-05-01T00:00:00"));
    }
}
