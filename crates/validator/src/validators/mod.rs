//! Built-in validators
//!
//! # Categories
//!
//! - **String**: length, regex pattern, email and URL syntax
//! - **Membership**: exact match against an allow-list
//! - **Collection**: size bounds
//! - **Logical**: boolean
//!
//! ```
//! use formgate_validator::prelude::*;
//!
//! let name = RuleSet::<str>::new().rule(min_length(3)).rule(max_length(20));
//! assert!(name.check("alice").is_ok());
//! ```

// String validators
pub mod content;
pub mod length;
pub mod pattern;

// Membership validators
pub mod membership;

// Collection validators
pub mod size;

// Logical validators
pub mod boolean;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use content::{Email, Url, email, url};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use pattern::{MatchesRegex, matches_regex};

pub use membership::{OneOf, one_of};

pub use size::{MaxSize, MinSize, max_size, min_size};

pub use boolean::{IsTrue, is_true};
