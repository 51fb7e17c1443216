//! Error types for validation failures
//!
//! A [`ValidationError`] is one issue: a stable code, a human-readable
//! message, an optional field path and a handful of parameters. Issues that
//! make further checks on the same value meaningless are marked fatal.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single structured validation issue.
///
/// # Examples
///
/// ```
/// use formgate_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Must be at least 3 characters")
///     .with_param("min", "3")
///     .with_field("0");
///
/// assert_eq!(error.param("min"), Some("3"));
/// assert!(!error.fatal);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "min_length", "invalid_format", "required"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Path of the offending element inside the validated value.
    ///
    /// Sequence elements use their index: `"0"`, `"2"`.
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the error message template (typically 0-2).
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,

    /// Whether evaluation of further checks must stop after this issue.
    pub fatal: bool,
}

impl ValidationError {
    /// Creates a new, non-fatal validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
            fatal: false,
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the human-readable message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Marks the error as fatal: no further checks run for this value.
    #[must_use = "builder methods must be chained or built"]
    pub fn fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        let unit = if min == 1 { "character" } else { "characters" };
        Self::new("min_length", format!("Must be at least {min} {unit}"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        let unit = if max == 1 { "character" } else { "characters" };
        Self::new("max_length", format!("Must be at most {max} {unit}"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(
        message: impl Into<Cow<'static, str>>,
        expected: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("invalid_format", message).with_param("expected", expected)
    }

    /// Creates a fatal "type_mismatch" error.
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::new("type_mismatch", format!("Expected {expected}, received {actual}"))
            .with_param("expected", expected)
            .with_param("actual", actual)
            .fatal()
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds multiple errors to the collection.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if any collected error is fatal.
    #[must_use]
    pub fn has_fatal(&self) -> bool {
        self.errors.iter().any(|e| e.fatal)
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the messages of all errors, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_ref()).collect()
    }

    /// Sets `field` on every error that has none yet.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        let field = field.into();
        for error in &mut self.errors {
            if error.field.is_none() {
                error.field = Some(field.clone());
            }
        }
        self
    }

    /// Converts to a Result.
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(!error.fatal);
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::min_length(5, 3);
        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.message, "Must be at least 5 characters");
    }

    #[test]
    fn test_singular_unit() {
        assert_eq!(ValidationError::min_length(1, 0).message, "Must be at least 1 character");
        assert_eq!(ValidationError::max_length(1, 2).message, "Must be at most 1 character");
    }

    #[test]
    fn test_type_mismatch_is_fatal() {
        let error = ValidationError::type_mismatch("string", "number");
        assert!(error.fatal);
        assert_eq!(error.message, "Expected string, received number");
    }

    #[test]
    fn test_display_with_field() {
        let error = ValidationError::required().with_field("2");
        assert_eq!(error.to_string(), "[2] required: This field is required");
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("error1", "First error"));
        errors.add(ValidationError::new("error2", "Second error").fatal());

        assert_eq!(errors.len(), 2);
        assert!(errors.has_fatal());
        assert_eq!(errors.messages(), vec!["First error", "Second error"]);
    }

    #[test]
    fn test_with_field_keeps_existing_paths() {
        let errors: ValidationErrors = vec![
            ValidationError::custom("a"),
            ValidationError::custom("b").with_field("inner"),
        ]
        .into_iter()
        .collect();

        let errors = errors.with_field("3");
        assert_eq!(errors.errors()[0].field.as_deref(), Some("3"));
        assert_eq!(errors.errors()[1].field.as_deref(), Some("inner"));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));
        let errors = ValidationErrors::from(ValidationError::required());
        assert!(errors.into_result(7).is_err());
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::required();
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
