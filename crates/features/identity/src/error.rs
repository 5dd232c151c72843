use std::borrow::Cow;

/// A specialized [`IdentityError`] enum of this crate.
#[persona_derive::persona_error]
pub enum IdentityError {
    /// Identity settings that cannot be applied.
    #[error("Identity config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal identity error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
