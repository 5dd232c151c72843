//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain crate and the layered config loader.
//!
//! ## Config loading
//! ```rust,ignore
//! use persona_kernel::config::load_config;
//! use persona_kernel::domain::config::PersonaConfig;
//!
//! let cfg: PersonaConfig = load_config(Some("persona.toml"))?;
//! ```
pub mod config;

pub use persona_domain as domain;
