//! Identity feature slice.
//!
//! * [`Profile`]: the identity record and its derived predicates.
//! * [`DenialRule`]: pluggable first-name denial, [`DeniedNames`] being the baseline.
//! * [`ExclusionList`]: the shared excluded-email set, owned by the [`Identity`] slice.

mod denial;
mod error;
mod exclusion;
mod profile;

pub use crate::denial::{CaseInsensitiveDeniedNames, DenialRule, DeniedNames};
pub use crate::error::{IdentityError, IdentityErrorExt};
pub use crate::exclusion::ExclusionList;
pub use crate::profile::Profile;

use persona_kernel::domain::config::IdentityConfig;
use persona_kernel::domain::registry::InitializedSlice;

/// Identity feature state.
#[persona_derive::persona_slice]
pub struct Identity {
    pub exclusions: ExclusionList,
}

impl Identity {
    /// Builds a profile checked against this slice's exclusion list.
    #[must_use]
    pub fn profile(&self, first_name: Option<&str>, email: Option<&str>) -> Profile {
        Profile::new(first_name, email, &self.exclusions)
    }
}

/// Initialize the identity feature.
///
/// The exclusion list is assigned only when `excluded_emails` is present;
/// otherwise it stays unset until someone calls [`ExclusionList::initialize`].
///
/// # Errors
/// Returns [`IdentityError::Config`] if an excluded email entry is blank.
pub fn init(config: &IdentityConfig) -> Result<InitializedSlice, IdentityError> {
    let exclusions = ExclusionList::new();

    if let Some(emails) = &config.excluded_emails {
        if let Some(index) = emails.iter().position(|email| email.trim().is_empty()) {
            return Err(IdentityError::Config {
                message: format!("excluded_emails[{index}] is blank").into(),
                context: Some("Identity slice initialization".into()),
            });
        }
        exclusions.initialize(emails.iter().cloned());
    }

    tracing::info!(
        exclusions_initialized = exclusions.is_initialized(),
        excluded = exclusions.len(),
        "Identity slice initialized"
    );

    let slice = Identity::new(IdentityInner { exclusions });

    Ok(InitializedSlice::new(slice))
}
