//! English list formatting for error messages.
//!
//! ```
//! use formgate_block::list::{conjunction, disjunction};
//!
//! assert_eq!(disjunction(["`Red`", "`Green`", "`Blue`"]), "`Red`, `Green`, or `Blue`");
//! assert_eq!(conjunction(["a", "b"]), "a and b");
//! ```

/// The word joining the last two items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// Joins items as `a`, `a or b`, `a, b, or c` (serial comma).
///
/// An empty input produces an empty string.
pub fn format_list<I, S>(items: I, connective: Connective) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<S> = items.into_iter().collect();
    let word = connective.as_str();

    match items.as_slice() {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [first, second] => format!("{} {word} {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let mut out = String::new();
            for item in init {
                out.push_str(item.as_ref());
                out.push_str(", ");
            }
            out.push_str(word);
            out.push(' ');
            out.push_str(last.as_ref());
            out
        }
    }
}

/// Joins items with "or".
pub fn disjunction<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format_list(items, Connective::Or)
}

/// Joins items with "and".
pub fn conjunction<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format_list(items, Connective::And)
}
