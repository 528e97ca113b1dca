//! The profile registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::EepError;
use crate::identifier::EepId;
use crate::profile::EepProfile;
use crate::profiles;

/// Flat registry mapping (RORG, FUNC, TYPE) triples to profile strategy
/// objects.
///
/// Resolution is exact-match only: an unregistered identifier is reported
/// as [`EepError::ProfileNotFound`], never answered with a fallback or
/// partial profile.
#[derive(Default)]
pub struct ProfileRegistry {
    profiles: HashMap<EepId, Arc<dyn EepProfile>>,
}

impl ProfileRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ProfileRegistry {
            profiles: HashMap::new(),
        }
    }

    /// Create a registry with the built-in profile catalogue.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for profile in profiles::builtin_profiles() {
            registry.register(profile);
        }
        registry
    }

    /// Register a profile under its own identifier, replacing any previous
    /// registration for the same triple.
    pub fn register(&mut self, profile: Arc<dyn EepProfile>) {
        self.profiles.insert(profile.eep(), profile);
    }

    /// Resolve a profile by exact identifier match.
    pub fn resolve(&self, eep: EepId) -> Result<Arc<dyn EepProfile>, EepError> {
        self.profiles
            .get(&eep)
            .cloned()
            .ok_or(EepError::ProfileNotFound(eep))
    }

    /// Number of registered profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
