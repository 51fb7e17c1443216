//! FATAL combinator - stop evaluation on failure

use crate::foundation::{Validate, ValidationError};

/// Marks every failure of the inner validator as fatal.
///
/// Inside a [`RuleSet`](crate::foundation::RuleSet) a fatal failure ends
/// evaluation, so later rules never see an input that already failed a
/// precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fatal<V> {
    inner: V,
}

impl<V> Fatal<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validate> Validate for Fatal<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(ValidationError::fatal)
    }
}

pub fn fatal<V>(validator: V) -> Fatal<V> {
    Fatal::new(validator)
}
