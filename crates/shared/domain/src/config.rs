use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared across crates.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PersonaConfigInner {
    pub identity: IdentityConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct PersonaConfig {
    #[serde(flatten, default)]
    inner: Arc<PersonaConfigInner>,
}

impl Deref for PersonaConfig {
    type Target = PersonaConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PersonaConfig {
    fn deref_mut(&mut self) -> &mut PersonaConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Identity validation settings.
///
/// `excluded_emails = None` leaves the exclusion list unset, while
/// `Some(vec![])` initializes it as an empty set.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub excluded_emails: Option<Vec<String>>,
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub name: String,
    pub level: String,
    pub console: bool,
    pub path: Option<PathBuf>,
    pub json: bool,
    pub env_filter: Option<String>,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            name: "persona".to_owned(),
            level: "info".to_owned(),
            console: true,
            path: None,
            json: false,
            env_filter: None,
        }
    }
}
