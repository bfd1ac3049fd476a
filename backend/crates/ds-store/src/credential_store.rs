//! In-memory user directory indexed by uid and by username.

use crate::{Result as StoreErrorResult, StoreError};

use ds_core::{UserEntity, UserInfo, UserRole};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use error_location::ErrorLocation;
use log::debug;

#[derive(Debug, Default)]
struct Directory {
    by_uid: HashMap<u64, UserEntity>,
    uid_by_username: HashMap<String, u64>,
    last_uid: u64,
}

/// Shared handle to the user directory.
///
/// Clones share the same underlying maps. Every operation takes the lock
/// once, so register and promote are atomic with respect to each other
/// and to concurrent lookups.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    directory: Arc<RwLock<Directory>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new account and assign it the next uid.
    ///
    /// Fails with `DuplicateUsername` if the username is taken; the
    /// existing entity is left untouched and no uid is consumed.
    #[track_caller]
    pub fn register(&self, info: UserInfo) -> StoreErrorResult<UserEntity> {
        let mut directory = self.write()?;

        if directory.uid_by_username.contains_key(&info.username) {
            return Err(StoreError::DuplicateUsername {
                username: info.username,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        directory.last_uid += 1;
        let uid = directory.last_uid;
        let entity = UserEntity::new(uid, info);

        directory
            .uid_by_username
            .insert(entity.info.username.clone(), uid);
        directory.by_uid.insert(uid, entity.clone());

        debug!("Registered user '{}' as uid {}", entity.username(), uid);

        Ok(entity)
    }

    #[track_caller]
    pub fn get_by_id(&self, uid: u64) -> StoreErrorResult<Option<UserEntity>> {
        let directory = self.read()?;
        Ok(directory.by_uid.get(&uid).cloned())
    }

    #[track_caller]
    pub fn get_by_username(&self, username: &str) -> StoreErrorResult<Option<UserEntity>> {
        let directory = self.read()?;
        Ok(directory
            .uid_by_username
            .get(username)
            .and_then(|uid| directory.by_uid.get(uid))
            .cloned())
    }

    /// Grant the admin role. Promoting an admin again is a no-op.
    #[track_caller]
    pub fn promote(&self, uid: u64) -> StoreErrorResult<()> {
        let mut directory = self.write()?;

        let entity = directory
            .by_uid
            .get_mut(&uid)
            .ok_or_else(|| StoreError::NotFound {
                uid,
                location: ErrorLocation::from(Location::caller()),
            })?;

        if entity.info.role != UserRole::Admin {
            entity.info.role = UserRole::Admin;
            debug!("Promoted uid {} to {}", uid, UserRole::Admin);
        }

        Ok(())
    }

    /// Number of registered accounts
    #[track_caller]
    pub fn len(&self) -> StoreErrorResult<usize> {
        Ok(self.read()?.by_uid.len())
    }

    #[track_caller]
    pub fn is_empty(&self) -> StoreErrorResult<bool> {
        Ok(self.len()? == 0)
    }

    #[track_caller]
    fn read(&self) -> StoreErrorResult<RwLockReadGuard<'_, Directory>> {
        self.directory.read().map_err(|_| StoreError::LockPoisoned {
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn write(&self) -> StoreErrorResult<RwLockWriteGuard<'_, Directory>> {
        self.directory.write().map_err(|_| StoreError::LockPoisoned {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
