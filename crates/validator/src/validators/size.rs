//! Collection size validators

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// MIN SIZE
// ============================================================================

/// Validates that a slice has at least `min` elements.
pub struct MinSize<T> {
    min: usize,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Validate for MinSize<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let size = input.len();
        if size >= self.min {
            Ok(())
        } else {
            Err(ValidationError::new(
                "min_size",
                format!("Must contain at least {} item(s)", self.min),
            )
            .with_param("min", self.min.to_string())
            .with_param("actual", size.to_string()))
        }
    }
}

impl<T> fmt::Debug for MinSize<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinSize").field("min", &self.min).finish()
    }
}

/// Creates a validator that checks if a slice has at least a minimum size.
///
/// ```
/// use formgate_validator::foundation::Validate;
/// use formgate_validator::validators::min_size;
///
/// let validator = min_size::<i32>(1);
/// assert!(validator.validate(&[1]).is_ok());
/// assert!(validator.validate(&[]).is_err());
/// ```
#[must_use]
pub fn min_size<T>(min: usize) -> MinSize<T> {
    MinSize {
        min,
        _phantom: PhantomData,
    }
}

// ============================================================================
// MAX SIZE
// ============================================================================

/// Validates that a slice has at most `max` elements.
pub struct MaxSize<T> {
    max: usize,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Validate for MaxSize<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let size = input.len();
        if size <= self.max {
            Ok(())
        } else {
            Err(ValidationError::new(
                "max_size",
                format!("Must contain at most {} item(s)", self.max),
            )
            .with_param("max", self.max.to_string())
            .with_param("actual", size.to_string()))
        }
    }
}

impl<T> fmt::Debug for MaxSize<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxSize").field("max", &self.max).finish()
    }
}

/// Creates a validator that checks if a slice has at most a maximum size.
#[must_use]
pub fn max_size<T>(max: usize) -> MaxSize<T> {
    MaxSize {
        max,
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_size() {
        let validator = min_size::<&str>(2);
        assert!(validator.validate(&["a", "b"]).is_ok());
        let error = validator.validate(&["a"]).unwrap_err();
        assert_eq!(error.code, "min_size");
        assert_eq!(error.param("actual"), Some("1"));
    }

    #[test]
    fn test_max_size() {
        let validator = max_size::<u8>(1);
        assert!(validator.validate(&[]).is_ok());
        assert!(validator.validate(&[1]).is_ok());
        assert!(validator.validate(&[1, 2]).is_err());
    }
}
