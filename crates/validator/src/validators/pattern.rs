//! Regular-expression validator

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

/// Validates that a string matches a regular expression.
///
/// The pattern is unanchored: it passes when it matches anywhere in the
/// input, so callers who need a full match write `^...$` themselves.
///
/// # Examples
///
/// ```
/// use formgate_validator::foundation::Validate;
/// use formgate_validator::validators::MatchesRegex;
///
/// let validator = MatchesRegex::new(r"^\d{3}-\d{4}$").unwrap();
/// assert!(validator.validate("123-4567").is_ok());
/// assert!(validator.validate("invalid").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pattern: Regex,
}

impl MatchesRegex {
    /// Compiles `pattern`.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// The source of the compiled pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Validate for MatchesRegex {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new("pattern", "Invalid format")
                .with_param("pattern", self.pattern.as_str().to_owned()))
        }
    }
}

/// Creates a regex validator.
pub fn matches_regex(pattern: &str) -> Result<MatchesRegex, regex::Error> {
    MatchesRegex::new(pattern)
}
