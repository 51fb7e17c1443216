//! Ordered rule sets
//!
//! A [`RuleSet`] holds independent checks for one input type. Every rule is
//! evaluated and every failure is collected, except that a fatal failure
//! ends the run.

use std::fmt;

use crate::foundation::{Validate, ValidationErrors};

type BoxedRule<I> = Box<dyn Validate<Input = I> + Send + Sync>;

/// An ordered list of validators over the same input.
///
/// # Examples
///
/// ```
/// use formgate_validator::prelude::*;
///
/// let rules = RuleSet::<str>::new()
///     .rule(min_length(3))
///     .rule(max_length(5))
///     .rule(matches_regex("^[a-z]+$").unwrap().with_message("Lowercase only"));
///
/// assert!(rules.check("abcd").is_ok());
///
/// let errors = rules.check("ABCDEFG").unwrap_err();
/// assert_eq!(errors.messages(), vec!["Must be at most 5 characters", "Lowercase only"]);
/// ```
pub struct RuleSet<I: ?Sized> {
    rules: Vec<BoxedRule<I>>,
}

impl<I: ?Sized> RuleSet<I> {
    /// Creates an empty rule set. An empty set accepts every input.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = I> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(validator));
        self
    }

    /// Appends a rule only when one is given.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule_opt<V>(self, validator: Option<V>) -> Self
    where
        V: Validate<Input = I> + Send + Sync + 'static,
    {
        match validator {
            Some(validator) => self.rule(validator),
            None => self,
        }
    }

    /// Number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule in order, collecting all failures.
    ///
    /// Stops right after the first fatal failure.
    pub fn check(&self, input: &I) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for rule in &self.rules {
            if let Err(error) = rule.validate(input) {
                let fatal = error.fatal;
                errors.add(error);
                if fatal {
                    break;
                }
            }
        }

        errors.into_result(())
    }
}

impl<I: ?Sized> Default for RuleSet<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized> fmt::Debug for RuleSet<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.len())
            .finish()
    }
}
