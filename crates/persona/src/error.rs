use persona_identity::IdentityError;
use persona_kernel::config::ConfigError;
use persona_logger::LoggerError;
use std::borrow::Cow;

/// Errors surfaced while bootstrapping the platform.
#[persona_derive::persona_error]
pub enum PersonaError {
    #[error("Configuration error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Logging error{}: {source}", format_context(.context))]
    Logger { source: LoggerError, context: Option<Cow<'static, str>> },

    /// A feature slice refused to initialize.
    #[error("Identity error{}: {source}", format_context(.context))]
    Identity { source: IdentityError, context: Option<Cow<'static, str>> },
}
