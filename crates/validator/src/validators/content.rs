//! Syntactic format validators for email addresses and URLs.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("hardcoded email regex pattern is valid")
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email syntax: one `@`, a dot-atom local part and a
    /// hostname made of RFC 1123 labels.
    ///
    /// ```
    /// use formgate_validator::foundation::Validate;
    /// use formgate_validator::validators::email;
    ///
    /// assert!(email().validate("mark@explorate.co").is_ok());
    /// assert!(email().validate("mark@").is_err());
    /// ```
    pub Email for str;
    rule(input) { EMAIL_PATTERN.is_match(input) }
    error(input) { ValidationError::invalid_format("Invalid email", "email") }
    fn email();
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string is an absolute URL.
    ///
    /// ```
    /// use formgate_validator::foundation::Validate;
    /// use formgate_validator::validators::url;
    ///
    /// assert!(url().validate("https://explorate.co/about").is_ok());
    /// assert!(url().validate("explorate.co").is_err());
    /// ```
    pub Url for str;
    rule(input) { ::url::Url::parse(input).is_ok() }
    error(input) { ValidationError::invalid_format("Invalid url", "url") }
    fn url();
}
