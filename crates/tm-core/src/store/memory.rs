use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{ProfileStore, StoreError};
use crate::filter::ProfileFilter;
use crate::Profile;

#[derive(Default)]
struct Inner {
    // Insertion order drives listing and leaderboard tie-breaks.
    profiles: Vec<Profile>,
    by_id: HashMap<String, usize>,
}

/// The in-process profile store. Listing scans at most `scan_limit` records
/// before filtering, matching the fixed bound the HTTP layer advertises.
pub struct MemoryProfileStore {
    inner: RwLock<Inner>,
    scan_limit: usize,
}

impl MemoryProfileStore {
    pub fn new(scan_limit: usize) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            scan_limit,
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|err| StoreError::Backend(format!("store lock poisoned: {err}")))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|err| StoreError::Backend(format!("store lock poisoned: {err}")))
    }
}

impl Default for MemoryProfileStore {
    fn default() -> Self {
        Self::new(crate::config::EngineLimits::default().scan_limit)
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn create(&self, profile: Profile) -> Result<Profile, StoreError> {
        let mut inner = self.write()?;

        if inner.by_id.contains_key(&profile.id) {
            return Err(StoreError::Conflict(profile.id));
        }

        let index = inner.profiles.len();
        inner.by_id.insert(profile.id.clone(), index);
        inner.profiles.push(profile.clone());
        Ok(profile)
    }

    async fn list(&self, filter: Option<&ProfileFilter>) -> Result<Vec<Profile>, StoreError> {
        let inner = self.read()?;

        let scanned = inner.profiles.iter().take(self.scan_limit);
        let profiles = match filter {
            Some(filter) if !filter.is_empty() => scanned
                .filter(|profile| filter.matches(profile))
                .cloned()
                .collect(),
            _ => scanned.cloned().collect(),
        };

        Ok(profiles)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Profile>, StoreError> {
        let inner = self.read()?;
        Ok(inner
            .by_id
            .get(id)
            .and_then(|index| inner.profiles.get(*index))
            .cloned())
    }
}
