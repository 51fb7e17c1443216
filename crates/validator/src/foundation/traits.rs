//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must implement.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Generic over the input type so a validator for `str` cannot be applied to
/// a slice by mistake. All validators return `Result<(), ValidationError>`:
/// a validator reports at most one issue, and accumulation across several
/// validators is the job of [`RuleSet`](crate::foundation::RuleSet).
///
/// # Examples
///
/// ```
/// use formgate_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::custom("Must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_ok());
/// assert!(NoSpaces.validate("a b").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use formgate_validator::prelude::*;
///
/// let validator = min_length(3).with_message("Name is too short");
/// let error = validator.validate("ab").unwrap_err();
/// assert_eq!(error.message, "Name is too short");
/// assert_eq!(error.code, "min_length");
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Replaces the message of any error the validator produces.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Replaces the code of any error the validator produces.
    fn with_code(self, code: impl Into<String>) -> WithMessage<Self> {
        WithMessage::code_only(self, code)
    }

    /// Marks every error the validator produces as fatal.
    fn fatal(self) -> Fatal<Self> {
        Fatal::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::fatal::Fatal;
pub use crate::combinators::message::WithMessage;

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
    }

    #[test]
    fn test_boxed_validator() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysValid);
        assert!(boxed.validate("test").is_ok());
    }
}
