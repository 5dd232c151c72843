//! The identity record.
//!
//! Two write paths exist for the first name and they are deliberately different:
//! construction substitutes [`DEFAULT_FIRST_NAME`] for an absent value but keeps
//! the supplied casing, while [`Profile::set_first_name`] lower-cases and lets an
//! absent value through.

use crate::denial::{DenialRule, DeniedNames};
use crate::exclusion::ExclusionList;
use persona_domain::constants::{DEFAULT_FIRST_NAME, NAME_SEPARATOR};
use std::fmt;
use tracing::{debug, warn};

/// An identity record with a construction-time email and mutable name fields.
///
/// `R` decides [`Profile::is_denied`]; the default is [`DeniedNames`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile<R = DeniedNames> {
    first_name: Option<String>,
    last_name: Option<String>,
    address: Option<String>,
    email: Option<String>,
    rule: R,
}

impl Profile {
    /// Builds a profile with the baseline denial rule.
    ///
    /// ```rust
    /// use persona_identity::{ExclusionList, Profile};
    ///
    /// let profile = Profile::new(None, Some("a@b.com"), &ExclusionList::new());
    /// assert_eq!(profile.first_name(), Some("Anonymous"));
    /// assert!(profile.is_default_name());
    /// assert_eq!(profile.to_string(), "Anonymous: a@b.com");
    /// ```
    #[must_use]
    pub fn new(first_name: Option<&str>, email: Option<&str>, exclusions: &ExclusionList) -> Self {
        Self::with_rule(first_name, email, exclusions, DeniedNames)
    }
}

impl<R: DenialRule> Profile<R> {
    /// Builds a profile with a caller-supplied denial rule.
    ///
    /// The email is stored first and only then checked against `exclusions`.
    /// An excluded email is reported through `tracing` and does not stop
    /// construction; use [`Profile::is_excluded`] to act on it.
    #[must_use]
    pub fn with_rule(
        first_name: Option<&str>,
        email: Option<&str>,
        exclusions: &ExclusionList,
        rule: R,
    ) -> Self {
        let profile = Self {
            first_name: Some(first_name.unwrap_or(DEFAULT_FIRST_NAME).to_owned()),
            last_name: None,
            address: None,
            email: email.map(str::to_owned),
            rule,
        };

        if profile.is_excluded(exclusions) {
            warn!("Profile constructed with an excluded email");
            debug!(email = ?profile.email, "Excluded email matched");
        }
        debug!(
            first_name = ?profile.first_name,
            defaulted = first_name.is_none(),
            exclusions_initialized = exclusions.is_initialized(),
            "Profile constructed"
        );

        profile
    }

    /// Whether the current first name is denied by this profile's rule.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        self.rule.is_denied(self.first_name())
    }
}

impl<R> Profile<R> {
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Stores the lower-cased value; `None` is stored as-is.
    pub fn set_first_name(&mut self, value: Option<&str>) {
        self.first_name = value.map(str::to_lowercase);
    }

    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, value: Option<&str>) {
        self.last_name = value.map(str::to_owned);
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn set_address(&mut self, value: Option<&str>) {
        self.address = value.map(str::to_owned);
    }

    /// The email given at construction. There is no setter.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub const fn rule(&self) -> &R {
        &self.rule
    }

    /// True when the first name matches [`DEFAULT_FIRST_NAME`] ignoring case.
    #[must_use]
    pub fn is_default_name(&self) -> bool {
        self.first_name().is_some_and(|name| eq_ignore_case(name, DEFAULT_FIRST_NAME))
    }

    /// `"{first} {last}"` from the current values; absent parts render empty.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!(
            "{}{NAME_SEPARATOR}{}",
            self.first_name().unwrap_or_default(),
            self.last_name().unwrap_or_default()
        )
    }

    /// Checks the stored email against `exclusions`. Unset lists exclude nothing.
    #[must_use]
    pub fn is_excluded(&self, exclusions: &ExclusionList) -> bool {
        exclusions.contains(self.email())
    }
}

impl<R> fmt::Display for Profile<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.first_name().unwrap_or_default(), self.email().unwrap_or_default())
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}
