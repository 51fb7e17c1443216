//! Set-membership validators

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string equals one of the allowed values.
    ///
    /// Comparison is exact: no trimming, no case folding.
    #[derive(PartialEq, Eq)]
    pub OneOf { allowed: Vec<String> } for str;
    rule(self, input) { self.allowed.iter().any(|value| value == input) }
    error(self, input) {
        ValidationError::new("one_of", "Value is not one of the allowed options")
            .with_param("actual", input.to_owned())
    }
    new(allowed: impl IntoIterator<Item = impl Into<String>>) {
        Self { allowed: allowed.into_iter().map(Into::into).collect() }
    }
    fn one_of(allowed: impl IntoIterator<Item = impl Into<String>>);
}
