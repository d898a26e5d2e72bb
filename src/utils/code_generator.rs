//! Short code generation and validation utilities.
//!
//! Generated codes are 6 characters drawn uniformly from the 62-character
//! alphanumeric alphabet. Custom codes must be 6-8 alphanumeric characters.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Characters a code may contain.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of randomly generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Compiled pattern for caller-supplied codes.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap());

/// Generates a random 6-character alphanumeric code.
///
/// Not cryptographically strong; uniqueness is enforced by the store, not here.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true iff `code` is 6 to 8 characters from `[A-Za-z0-9]`.
pub fn is_valid_custom_code(code: &str) -> bool {
    CUSTOM_CODE_REGEX.is_match(code)
}

/// Validates a user-provided custom short code.
///
/// No reserved-word filtering is applied.
///
/// # Errors
///
/// Returns [`AppError::InvalidCode`] if the code does not match the pattern.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !is_valid_custom_code(code) {
        return Err(AppError::invalid_code(
            "Code must be 6-8 alphanumeric characters",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_62_distinct_characters() {
        let unique: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), 62);
        assert!(ALPHABET.iter().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), GENERATED_CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_is_valid_custom_code() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(is_valid_custom_code(&code), "generated '{}'", code);
        }
    }

    #[test]
    fn test_generate_code_produces_varied_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();
        assert!(codes.len() > 990);
    }

    #[test]
    fn test_validate_minimum_length() {
        assert!(validate_custom_code("abc123").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        assert!(validate_custom_code("abcD1234").is_ok());
    }

    #[test]
    fn test_validate_mixed_case() {
        assert!(validate_custom_code("AbCdEf").is_ok());
    }

    #[test]
    fn test_validate_reserved_looking_words_allowed() {
        assert!(validate_custom_code("healthz").is_ok());
        assert!(validate_custom_code("dashboard").is_err()); // 9 chars
    }

    #[test]
    fn test_validate_too_short() {
        let result = validate_custom_code("abc12");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::InvalidCode { .. }));
        assert!(err.to_string().contains("6-8"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_custom_code("abcd12345").is_err());
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(validate_custom_code("my-code").is_err());
        assert!(validate_custom_code("my_code").is_err());
        assert!(validate_custom_code("abc 123").is_err());
    }

    #[test]
    fn test_validate_non_ascii() {
        assert!(validate_custom_code("abcdé1").is_err());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_trailing_newline() {
        assert!(validate_custom_code("abc123\n").is_err());
    }
}
