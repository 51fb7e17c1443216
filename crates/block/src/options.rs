//! Compile-time options.
//!
//! The only host-dependent input is the default phone country. It is passed
//! in explicitly so compiled validators never read process state.

use std::env;

use crate::numbering::PhoneCountry;

/// Options applied when compiling block validators.
///
/// # Examples
///
/// ```
/// use formgate_block::options::{CompileOptions, DefaultCountry};
///
/// let options = CompileOptions::new()
///     .allow_nullish(true)
///     .default_country(DefaultCountry::new("AU").unwrap());
///
/// assert!(options.allow_nullish);
/// assert_eq!(options.default_country.unwrap().code(), "AU");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Accept absent and blank values regardless of each block's own
    /// `optional` flag. Used for drafts and partial submissions.
    pub allow_nullish: bool,

    /// Country assumed for phone numbers written without a country code.
    pub default_country: Option<DefaultCountry>,
}

impl CompileOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn allow_nullish(mut self, allow: bool) -> Self {
        self.allow_nullish = allow;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn default_country(mut self, country: DefaultCountry) -> Self {
        self.default_country = Some(country);
        self
    }
}

// ============================================================================
// DEFAULT COUNTRY
// ============================================================================

/// A supported country used to resolve national-format phone numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultCountry(PhoneCountry);

impl DefaultCountry {
    /// Validates an ISO 3166-1 alpha-2 code. Returns `None` for codes with no
    /// known numbering plan.
    #[must_use]
    pub fn new(code: &str) -> Option<Self> {
        PhoneCountry::lookup(code).map(Self)
    }

    /// Extracts the region from a locale tag such as `en-AU` or
    /// `en_AU.UTF-8`.
    ///
    /// A missing or unsupported region yields `None`.
    ///
    /// ```
    /// use formgate_block::options::DefaultCountry;
    ///
    /// assert_eq!(DefaultCountry::from_locale("en-AU").unwrap().code(), "AU");
    /// assert_eq!(DefaultCountry::from_locale("de_DE.UTF-8").unwrap().code(), "DE");
    /// assert!(DefaultCountry::from_locale("en").is_none());
    /// assert!(DefaultCountry::from_locale("C").is_none());
    /// ```
    #[must_use]
    pub fn from_locale(locale: &str) -> Option<Self> {
        let tag = locale
            .split(['.', '@'])
            .next()
            .unwrap_or_default();
        let region = tag.split(['-', '_']).nth(1)?;

        let country = Self::new(region);
        if country.is_none() {
            tracing::debug!(locale, region, "discarding unsupported locale region");
        }
        country
    }

    /// Reads the locale from `LC_ALL`, `LC_MESSAGES` or `LANG`, first set
    /// variable wins.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .into_iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.is_empty())
            .and_then(|locale| Self::from_locale(&locale))
    }

    /// The upper-case alpha-2 code.
    #[must_use]
    pub fn code(&self) -> &str {
        self.0.code()
    }

    pub(crate) fn country(&self) -> &PhoneCountry {
        &self.0
    }
}
