//! User registry service.
//!
//! # Responsibility
//! - Provide add/delete/lookup/list/count entry points over one store.
//! - Report "not found" through return values, never through errors.
//!
//! # Invariants
//! - The manager is the only writer of its store while it lives.
//! - `delete_user` removes every record with the given id, not only the first.
//! - `get_user_by_id` returns the first match in current sequence order.
//! - `get_user_count` always equals `get_all_users().len()`.

use crate::model::user::User;
use crate::store::user_store::{InMemoryUserStore, UserStore};
use log::debug;

/// Registry service wrapping a user store.
///
/// The store is moved in at construction, so a manager can never exist
/// without one. Pass `&mut store` to keep ownership on the caller side.
#[derive(Debug)]
pub struct UserManager<S: UserStore = InMemoryUserStore> {
    store: S,
}

impl UserManager {
    /// Creates a manager over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryUserStore::new())
    }
}

impl<S: UserStore + Default> Default for UserManager<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: UserStore> UserManager<S> {
    /// Creates a manager that operates on `store` for its whole lifetime.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read-only view of the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Releases the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Appends `user` to the end of the sequence.
    ///
    /// Duplicate ids are accepted as-is.
    pub fn add_user(&mut self, user: User) {
        let user_id = user.id.clone();
        self.store.push(user);
        debug!(
            "event=user_add module=user_manager status=ok user_id={} count={}",
            user_id,
            self.store.len()
        );
    }

    /// Removes all records whose id equals `user_id`.
    ///
    /// Returns `true` when at least one record was removed.
    pub fn delete_user(&mut self, user_id: &str) -> bool {
        let removed = self.store.remove_all(user_id);
        if removed == 0 {
            debug!(
                "event=user_delete module=user_manager status=not_found user_id={}",
                user_id
            );
            return false;
        }

        debug!(
            "event=user_delete module=user_manager status=ok user_id={} removed={} count={}",
            user_id,
            removed,
            self.store.len()
        );
        true
    }

    /// Returns the first record with a matching id.
    pub fn get_user_by_id(&self, user_id: &str) -> Option<&User> {
        let found = self.store.users().iter().find(|user| user.id == user_id);
        if found.is_none() {
            debug!(
                "event=user_get module=user_manager status=not_found user_id={}",
                user_id
            );
        }
        found
    }

    /// Returns a new list of the current records in insertion order.
    ///
    /// The list is independent of the store; its elements borrow the stored
    /// records rather than cloning them.
    pub fn get_all_users(&self) -> Vec<&User> {
        self.store.users().iter().collect()
    }

    pub fn get_user_count(&self) -> usize {
        self.store.len()
    }
}
