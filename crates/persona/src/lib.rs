//! Facade crate for `Persona` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates logging and feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust,ignore
//! let persona = persona::Persona::bootstrap(Some("persona.toml"))?;
//! let identity = persona.identity().expect("identity slice is always registered");
//! let profile = identity.profile(None, Some("a@b.com"));
//! assert_eq!(profile.to_string(), "Anonymous: a@b.com");
//! ```

mod error;
mod logging;

pub use crate::error::{PersonaError, PersonaErrorExt};
pub use crate::logging::init_logging;
pub use persona_domain as domain;
pub use persona_kernel as kernel;
pub use persona_logger as logger;

use domain::config::PersonaConfig;
use domain::registry::{FeatureSlice, InitializedSlice};
use features::identity::Identity;
use persona_logger::Logger;
use std::path::Path;

/// Feature registry for runtime introspection.
pub mod features {
    pub use persona_identity as identity;

    /// Slices registered by [`crate::init`].
    pub const ENABLED: &[&str] = &["identity"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &PersonaConfig) -> Result<Vec<InitializedSlice>, PersonaError> {
    let mut slices = Vec::with_capacity(features::ENABLED.len());

    // Identity
    slices.push(features::identity::init(&config.identity)?);

    Ok(slices)
}

/// A bootstrapped process: configuration, initialized slices and, when
/// requested, the logging handle.
#[derive(Debug)]
pub struct Persona {
    config: PersonaConfig,
    slices: Vec<InitializedSlice>,
    logger: Option<Logger>,
}

impl Persona {
    /// Loads configuration from `path` (plus `PERSONA__` env overrides), installs
    /// logging and initializes every slice.
    ///
    /// # Errors
    /// Fails if the configuration cannot be loaded, a subscriber is already
    /// installed, or a slice rejects its settings.
    pub fn bootstrap(path: Option<impl AsRef<Path>>) -> Result<Self, PersonaError> {
        let config = kernel::config::load_config::<PersonaConfig>(path)
            .context("Loading persona configuration")?;
        let logger = init_logging(&config.logging)?;

        let mut persona = Self::from_config(config)?;
        persona.logger = Some(logger);

        Ok(persona)
    }

    /// Initializes every slice from an already loaded configuration, leaving
    /// logging to the caller.
    ///
    /// # Errors
    /// Fails if a slice rejects its settings.
    pub fn from_config(config: PersonaConfig) -> Result<Self, PersonaError> {
        let slices = init(&config)?;
        tracing::info!(slices = slices.len(), "Persona initialized");

        Ok(Self { config, slices, logger: None })
    }

    #[must_use]
    pub fn config(&self) -> &PersonaConfig {
        &self.config
    }

    /// Whether this instance owns the global logging handle.
    #[must_use]
    pub const fn has_logger(&self) -> bool {
        self.logger.is_some()
    }

    /// Looks up an initialized slice by type.
    #[must_use]
    pub fn slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.slices.iter().find_map(InitializedSlice::downcast_ref::<T>)
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.slice::<Identity>()
    }
}
