//! Pluggable first-name denial rules.

use persona_domain::constants::DENIED_NAMES;

/// Decides whether a profile's current first name is denied.
///
/// Any `Fn(Option<&str>) -> bool` closure is a rule too:
///
/// ```rust
/// use persona_identity::{ExclusionList, Profile};
///
/// let no_short_names = |name: Option<&str>| name.is_some_and(|n| n.chars().count() < 3);
/// let profile = Profile::with_rule(Some("Al"), None, &ExclusionList::new(), no_short_names);
/// assert!(profile.is_denied());
/// ```
pub trait DenialRule {
    fn is_denied(&self, first_name: Option<&str>) -> bool;
}

/// Baseline rule: exact, case-sensitive membership in [`DENIED_NAMES`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeniedNames;

impl DenialRule for DeniedNames {
    fn is_denied(&self, first_name: Option<&str>) -> bool {
        first_name.is_some_and(|name| DENIED_NAMES.contains(&name))
    }
}

/// Like [`DeniedNames`], but `"Root"` and `"ADMIN"` are denied as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitiveDeniedNames;

impl DenialRule for CaseInsensitiveDeniedNames {
    fn is_denied(&self, first_name: Option<&str>) -> bool {
        first_name.is_some_and(|name| DENIED_NAMES.contains(&name.to_lowercase().as_str()))
    }
}

impl<F> DenialRule for F
where
    F: Fn(Option<&str>) -> bool,
{
    fn is_denied(&self, first_name: Option<&str>) -> bool {
        self(first_name)
    }
}
