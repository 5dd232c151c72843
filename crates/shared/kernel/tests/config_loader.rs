use persona_kernel::config::{ConfigError, load_config, load_config_with_env};
use persona_kernel::domain::config::PersonaConfig;
use std::fs;

#[test]
fn loads_persona_config_from_toml() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("persona.toml");
    fs::write(
        &path,
        r#"
[identity]
excluded_emails = ["spam@example.com"]

[logging]
name = "loader-test"
level = "debug"
"#,
    )?;

    let cfg: PersonaConfig = load_config(Some(&path))?;
    assert_eq!(cfg.identity.excluded_emails, Some(vec!["spam@example.com".to_owned()]));
    assert_eq!(cfg.logging.name, "loader-test");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.console);

    Ok(())
}

#[test]
fn missing_file_is_reported_with_context() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");

    let err = load_config::<PersonaConfig>(Some(&path)).expect_err("missing file must fail");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn malformed_shape_fails_deserialization() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[identity]\nexcluded_emails = 42\n")?;

    let err = load_config::<PersonaConfig>(Some(&path)).expect_err("bad shape must fail");
    assert!(err.to_string().contains("Failed to deserialize config"));

    Ok(())
}

#[test]
fn env_overrides_replace_file_values() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("persona.toml");
    fs::write(&path, "[identity]\nexcluded_emails = [\"file@example.com\"]\n\n[logging]\nlevel = \"info\"\n")?;

    let env = [
        ("PERSONA__IDENTITY__EXCLUDED_EMAILS", "a@x.com,b@y.com"),
        ("PERSONA__LOGGING__LEVEL", "debug"),
        ("PERSONA__LOGGING__CONSOLE", "false"),
        ("UNRELATED__LOGGING__LEVEL", "trace"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect();

    let cfg: PersonaConfig = load_config_with_env(Some(&path), Some(env))?;
    assert_eq!(
        cfg.identity.excluded_emails,
        Some(vec!["a@x.com".to_owned(), "b@y.com".to_owned()])
    );
    assert_eq!(cfg.logging.level, "debug");
    assert!(!cfg.logging.console);

    Ok(())
}

#[test]
fn empty_env_leaves_file_values() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("persona.toml");
    fs::write(&path, "[logging]\nlevel = \"warn\"\n")?;

    let cfg: PersonaConfig = load_config_with_env(Some(&path), Some(Default::default()))?;
    assert_eq!(cfg.logging.level, "warn");
    assert_eq!(cfg.identity.excluded_emails, None);

    Ok(())
}
