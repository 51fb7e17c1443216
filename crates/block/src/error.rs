use formgate_validator::foundation::ValidationError;

/// Error type for block compilation.
///
/// These are faults in a block *definition*. Faults in a submitted value are
/// reported as [`ValidationErrors`](formgate_validator::foundation::ValidationErrors)
/// by the compiled validator instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    /// A text block declares a pattern that is not a valid regular expression.
    #[error("invalid pattern `{pattern}` for block `{key}`: {reason}")]
    InvalidPattern {
        key: String,
        pattern: String,
        reason: String,
    },

    /// A phone block allows a country the numbering metadata does not know.
    #[error("unsupported country `{country}` for block `{key}`")]
    UnsupportedCountry { key: String, country: String },

    /// A block definition could not be parsed.
    #[error("invalid block definition: {reason}")]
    Definition { reason: String },
}

impl BlockError {
    /// Broad error category for grouping in logs and metrics.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::InvalidPattern { .. } => "config",
            Self::UnsupportedCountry { .. } => "config",
            Self::Definition { .. } => "serialization",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidPattern { .. } => "BLOCK_INVALID_PATTERN",
            Self::UnsupportedCountry { .. } => "BLOCK_UNSUPPORTED_COUNTRY",
            Self::Definition { .. } => "BLOCK_DEFINITION",
        }
    }
}

impl From<serde_json::Error> for BlockError {
    fn from(error: serde_json::Error) -> Self {
        Self::Definition {
            reason: error.to_string(),
        }
    }
}

// ============================================================================
// ISSUE CLASSIFICATION
// ============================================================================

/// Coarse class of a validation issue, derived from its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// Wrong value type or malformed email / URL syntax.
    Format,
    /// Length, pattern, size or count out of bounds.
    Constraint,
    /// Value outside an allowed set (options, domains, countries, MIME types).
    Membership,
    /// Absent or empty where a value is required.
    Required,
    /// Phone number could not be parsed.
    Parse,
}

impl IssueKind {
    /// Classifies an issue by its code. Unrecognised codes count as
    /// constraint violations.
    #[must_use]
    pub fn of(error: &ValidationError) -> Self {
        match error.code.as_ref() {
            "type_mismatch" | "invalid_format" => Self::Format,
            "one_of" | "domain_not_allowed" | "country_not_allowed" | "file_type_not_allowed" => {
                Self::Membership
            }
            "required" => Self::Required,
            "invalid_phone" => Self::Parse,
            _ => Self::Constraint,
        }
    }
}
