//! Adapter over the `phonenumber` crate.
//!
//! Everything phone-specific the compilers need goes through here: country
//! lookup with calling codes, parsing with an optional default country, and
//! E.164 formatting.

use std::fmt;

use phonenumber::country::Id;
use phonenumber::metadata::DATABASE;
use phonenumber::Mode;

/// A country known to the numbering metadata.
#[derive(Clone, PartialEq, Eq)]
pub struct PhoneCountry {
    id: Id,
    code: String,
    calling_code: u16,
}

impl PhoneCountry {
    /// Looks up an ISO 3166-1 alpha-2 code, case-insensitively.
    ///
    /// Returns `None` for codes the metadata has no numbering plan for.
    ///
    /// ```
    /// use formgate_block::numbering::PhoneCountry;
    ///
    /// let au = PhoneCountry::lookup("au").unwrap();
    /// assert_eq!(au.code(), "AU");
    /// assert_eq!(au.calling_code(), 61);
    /// assert!(PhoneCountry::lookup("QQ").is_none());
    /// ```
    #[must_use]
    pub fn lookup(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_uppercase();
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }

        let id = code.parse::<Id>().ok()?;
        let calling_code = DATABASE.by_id(code.as_str())?.country_code();

        Some(Self {
            id,
            code,
            calling_code,
        })
    }

    /// Whether `code` names a supported country.
    #[must_use]
    pub fn is_supported(code: &str) -> bool {
        Self::lookup(code).is_some()
    }

    /// The upper-case alpha-2 code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The international calling code, without the `+`.
    #[must_use]
    pub fn calling_code(&self) -> u16 {
        self.calling_code
    }

    /// `CODE (+N)`, as used in error messages.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} (+{})", self.code, self.calling_code)
    }

    pub(crate) fn id(&self) -> Id {
        self.id
    }
}

impl fmt::Debug for PhoneCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PhoneCountry").field(&self.code).finish()
    }
}

impl fmt::Display for PhoneCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// A successfully parsed phone number.
#[derive(Debug, Clone)]
pub struct ParsedPhone {
    e164: String,
    country: Option<Id>,
}

impl ParsedPhone {
    /// Canonical `+<country code><national number>` form.
    #[must_use]
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// Country the number itself resolves to, falling back to `default`.
    pub(crate) fn resolved_country(&self, default: Option<&PhoneCountry>) -> Option<Id> {
        self.country.or_else(|| default.map(PhoneCountry::id))
    }
}

/// Parses `raw`, using `default` for numbers written without a country code.
///
/// Returns `None` when the parser rejects the input.
///
/// ```
/// use formgate_block::numbering::{PhoneCountry, parse};
///
/// let au = PhoneCountry::lookup("AU");
/// let number = parse("0404 001 111", au.as_ref()).unwrap();
/// assert_eq!(number.e164(), "+61404001111");
/// assert!(parse("0404 001 111", None).is_none());
/// ```
#[must_use]
pub fn parse(raw: &str, default: Option<&PhoneCountry>) -> Option<ParsedPhone> {
    let number = match phonenumber::parse(default.map(PhoneCountry::id), raw) {
        Ok(number) => number,
        Err(error) => {
            tracing::trace!(%error, "phone number rejected by parser");
            return None;
        }
    };

    Some(ParsedPhone {
        e164: number.format().mode(Mode::E164).to_string(),
        country: number.country().id(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("AU", 61)]
    #[case("gb", 44)]
    #[case(" US ", 1)]
    #[case("NZ", 64)]
    fn lookup_known_countries(#[case] code: &str, #[case] calling: u16) {
        let country = PhoneCountry::lookup(code).unwrap();
        assert_eq!(country.calling_code(), calling);
        assert_eq!(country.code(), code.trim().to_ascii_uppercase());
    }

    #[rstest]
    #[case("")]
    #[case("A")]
    #[case("AUS")]
    #[case("QQ")]
    #[case("1A")]
    fn lookup_rejects_unknown_codes(#[case] code: &str) {
        assert!(!PhoneCountry::is_supported(code));
    }

    #[test]
    fn label_includes_calling_code() {
        assert_eq!(PhoneCountry::lookup("AU").unwrap().label(), "AU (+61)");
    }

    #[test]
    fn international_number_keeps_its_country() {
        let au = PhoneCountry::lookup("AU").unwrap();
        let gb = PhoneCountry::lookup("GB").unwrap();
        let number = parse("+442071838750", Some(&au)).unwrap();
        assert_eq!(number.e164(), "+442071838750");
        assert_eq!(number.resolved_country(Some(&au)), Some(gb.id()));
    }

    #[test]
    fn garbage_does_not_parse() {
        assert!(parse("not a phone number", None).is_none());
        assert!(parse("", None).is_none());
    }
}
