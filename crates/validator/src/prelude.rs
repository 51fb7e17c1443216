//! Prelude module for convenient imports.
//!
//! Provides a single `use formgate_validator::prelude::*;` import that brings
//! in the traits, error types, rule sets, validators and combinators.
//!
//! # Examples
//!
//! ```
//! use formgate_validator::prelude::*;
//!
//! let tags = RuleSet::<[String]>::new().rule(min_size(1)).rule(max_size(10));
//! assert!(tags.check(&["rust".to_owned()]).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, rule sets
// ============================================================================

pub use crate::foundation::{RuleSet, Validate, ValidateExt, ValidationError, ValidationErrors};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Error-adjusting wrappers
// ============================================================================

pub use crate::combinators::{Fatal, WithMessage, fatal, with_message};
