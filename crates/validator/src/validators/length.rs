//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), so `"héllo"` is five
//! characters long even though it is six bytes.

use crate::foundation::ValidationError;

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { char_len(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, char_len(input)) }
    new(min: usize) { Self { min } }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { char_len(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, char_len(input)) }
    new(max: usize) { Self { max } }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_min_length_valid() {
        let validator = MinLength::new(5);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hello world").is_ok());
    }

    #[test]
    fn test_min_length_invalid() {
        let validator = MinLength::new(5);
        assert!(validator.validate("hi").is_err());
        assert!(validator.validate("").is_err());
    }

    #[test]
    fn test_max_length_valid() {
        let validator = MaxLength::new(10);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("helloworld").is_ok());
    }

    #[test]
    fn test_max_length_invalid() {
        let error = MaxLength::new(10).validate("verylongstring").unwrap_err();
        assert_eq!(error.code, "max_length");
        assert_eq!(error.param("actual"), Some("14"));
    }

    #[test]
    fn test_unicode_handling() {
        assert!(MinLength::new(5).validate("h\u{e9}llo").is_ok());
        assert!(MaxLength::new(5).validate("h\u{e9}llo").is_ok());
        assert!(MinLength::new(3).validate("\u{1f44b}\u{1f30d}").is_err());
    }
}
