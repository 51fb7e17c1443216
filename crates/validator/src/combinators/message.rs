//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message (and optionally the code) of a validator.
///
/// Parameters and the fatal flag of the original error are kept.
///
/// # Examples
///
/// ```
/// use formgate_validator::combinators::WithMessage;
/// use formgate_validator::foundation::Validate;
/// use formgate_validator::validators::matches_regex;
///
/// let validator = WithMessage::new(matches_regex(r"^\d+$").unwrap(), "Digits only");
///
/// let error = validator.validate("12a").unwrap_err();
/// assert_eq!(error.message, "Digits only");
/// assert_eq!(error.code, "pattern");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Option<String>,
    code: Option<String>,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: Some(message.into()),
            code: None,
        }
    }

    /// Creates a combinator that only overrides the error code, keeping the original message.
    pub fn code_only(inner: V, code: impl Into<String>) -> Self {
        Self {
            inner,
            message: None,
            code: Some(code.into()),
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message, if set.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|mut error| {
            if let Some(code) = &self.code {
                error.code = Cow::Owned(code.clone());
            }
            if let Some(message) = &self.message {
                error.message = Cow::Owned(message.clone());
            }
            error
        })
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
