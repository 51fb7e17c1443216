//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Composition**: [`RuleSet`]
//!
//! Validators are generic over their input type and report a single
//! structured issue. A [`RuleSet`] strings independent validators together
//! and collects every issue, so a caller sees all violated constraints at
//! once unless one of them is fatal.
//!
//! ```
//! use formgate_validator::prelude::*;
//!
//! let rules = RuleSet::<str>::new().rule(min_length(3)).rule(max_length(10));
//! assert!(rules.check("John").is_ok());
//! assert!(rules.check("J").is_err());
//! ```

pub mod error;
pub mod rules;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use rules::RuleSet;
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A validation result that can contain multiple errors.
pub type ValidationResultMulti<T> = Result<T, ValidationErrors>;
