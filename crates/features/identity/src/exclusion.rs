//! Process-wide list of excluded emails.
//!
//! The list starts unset. [`ExclusionList::initialize`] assigns it; later calls
//! replace the previous contents. Lookups against an unset list never fail and
//! report "not excluded".

use fxhash::FxHashSet;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared container for excluded emails.
///
/// Hand it by reference to whatever validates emails; the identity slice owns
/// one instance per process.
#[derive(Debug, Default)]
pub struct ExclusionList {
    emails: RwLock<Option<Arc<FxHashSet<String>>>>,
}

impl ExclusionList {
    /// Creates an unset list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the excluded emails, replacing any previous assignment.
    ///
    /// Entries are stored verbatim and matched exactly (case-sensitive).
    pub fn initialize<I, S>(&self, emails: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: FxHashSet<String> = emails.into_iter().map(Into::into).collect();
        let count = set.len();

        let previous = self.emails.write().replace(Arc::new(set));
        if previous.is_some() {
            warn!(count, "Exclusion list re-initialized, previous entries replaced");
        } else {
            debug!(count, "Exclusion list initialized");
        }
    }

    /// True once [`ExclusionList::initialize`] has run, even with an empty set.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.emails.read().is_some()
    }

    /// Membership test. An unset list or an absent email is never excluded.
    #[must_use]
    pub fn contains(&self, email: Option<&str>) -> bool {
        let Some(email) = email else {
            return false;
        };
        self.emails.read().as_ref().is_some_and(|set| set.contains(email))
    }

    /// Number of excluded emails; zero while unset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emails.read().as_ref().map_or(0, |set| set.len())
    }

    /// The current set, if assigned. Holding it does not block re-initialization.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<FxHashSet<String>>> {
        self.emails.read().clone()
    }
}
