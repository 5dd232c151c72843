use persona_identity::{
    CaseInsensitiveDeniedNames, DenialRule, DeniedNames, ExclusionList, Profile,
};

#[test]
fn anonymous_profile_end_to_end() {
    let exclusions = ExclusionList::new();
    let profile = Profile::new(None, Some("a@b.com"), &exclusions);

    assert_eq!(profile.first_name(), Some("Anonymous"));
    assert!(profile.is_default_name());
    assert_eq!(profile.to_string(), "Anonymous: a@b.com");
    assert_eq!(profile.email(), Some("a@b.com"));
}

#[test]
fn renamed_to_root_is_denied() {
    let exclusions = ExclusionList::new();
    let mut profile = Profile::new(Some("Bob"), Some("x@y.com"), &exclusions);
    assert!(!profile.is_denied());

    profile.set_first_name(Some("ROOT"));
    assert_eq!(profile.first_name(), Some("root"));
    assert!(profile.is_denied());
    assert_eq!(profile.to_string(), "root: x@y.com");
}

#[test]
fn email_survives_every_mutation() {
    let exclusions = ExclusionList::new();
    let mut profile = Profile::new(Some("Bob"), Some("Mixed@Case.COM"), &exclusions);

    profile.set_first_name(Some("Alice"));
    profile.set_last_name(Some("Doe"));
    profile.set_address(Some("1 Way"));
    profile.set_first_name(None);

    assert_eq!(profile.email(), Some("Mixed@Case.COM"));
    assert_eq!(profile.to_string(), ": Mixed@Case.COM");
}

#[test]
fn exclusions_are_consulted_at_construction_without_failing() {
    let exclusions = ExclusionList::new();
    exclusions.initialize(["blocked@example.com"]);

    let blocked = Profile::new(Some("Eve"), Some("blocked@example.com"), &exclusions);
    let allowed = Profile::new(Some("Eve"), Some("fine@example.com"), &exclusions);

    assert!(blocked.is_excluded(&exclusions));
    assert!(!allowed.is_excluded(&exclusions));
    assert_eq!(blocked.first_name(), Some("Eve"));
}

#[test]
fn construction_before_initialization_is_harmless() {
    let exclusions = ExclusionList::new();
    let profile = Profile::new(Some("Bob"), Some("x@y.com"), &exclusions);

    assert!(!exclusions.is_initialized());
    assert!(!profile.is_excluded(&exclusions));
}

#[derive(Debug)]
struct DenyLongNames(usize);

impl DenialRule for DenyLongNames {
    fn is_denied(&self, first_name: Option<&str>) -> bool {
        first_name.is_some_and(|name| name.chars().count() > self.0)
    }
}

#[test]
fn custom_rules_replace_the_baseline() {
    let exclusions = ExclusionList::new();

    let mut custom = Profile::with_rule(Some("root"), None, &exclusions, DenyLongNames(5));
    assert!(!custom.is_denied(), "custom rule ignores the static name set");
    custom.set_first_name(Some("Bartholomew"));
    assert!(custom.is_denied());

    let relaxed = Profile::with_rule(Some("Admin"), None, &exclusions, CaseInsensitiveDeniedNames);
    assert!(relaxed.is_denied());

    let strict = Profile::with_rule(Some("Admin"), None, &exclusions, DeniedNames);
    assert!(!strict.is_denied());

    let nobody = Profile::with_rule(None, None, &exclusions, |_: Option<&str>| false);
    assert!(!nobody.is_denied());
    assert!(nobody.is_default_name());
}
