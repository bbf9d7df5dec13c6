//! User store contract and `Vec`-backed implementation.
//!
//! # Responsibility
//! - Hold user records as an ordered sequence.
//! - Provide the primitive append/filter/read steps the manager composes.
//!
//! # Invariants
//! - `push` appends at the end; prior order is untouched.
//! - `remove_all` drops every matching record and keeps survivors in order.

use crate::model::user::User;

/// Ordered sequence of user records.
pub trait UserStore {
    /// Appends a record at the end of the sequence.
    fn push(&mut self, user: User);

    /// Removes every record whose id equals `id`.
    ///
    /// Returns the number of removed records (`0` when none matched).
    fn remove_all(&mut self, id: &str) -> usize;

    /// Returns the current sequence in insertion order.
    fn users(&self) -> &[User];

    fn len(&self) -> usize {
        self.users().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lends an existing store to a manager for the borrow's lifetime.
///
/// The exclusive borrow makes the manager the single writer while it lives.
impl<S: UserStore + ?Sized> UserStore for &mut S {
    fn push(&mut self, user: User) {
        (**self).push(user);
    }

    fn remove_all(&mut self, id: &str) -> usize {
        (**self).remove_all(id)
    }

    fn users(&self) -> &[User] {
        (**self).users()
    }
}

/// Process-memory store backed by a `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing sequence without reordering or deduplicating it.
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn into_users(self) -> Vec<User> {
        self.users
    }
}

impl UserStore for InMemoryUserStore {
    fn push(&mut self, user: User) {
        self.users.push(user);
    }

    fn remove_all(&mut self, id: &str) -> usize {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        before - self.users.len()
    }

    fn users(&self) -> &[User] {
        &self.users
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryUserStore, UserStore};
    use crate::model::user::User;

    fn user(id: &str, name: &str) -> User {
        User::new(id, name, format!("{name}@example.com"), 1_700_000_000_000)
    }

    #[test]
    fn push_appends_in_order() {
        let mut store = InMemoryUserStore::new();
        store.push(user("1", "alice"));
        store.push(user("2", "bob"));

        let ids: Vec<&str> = store.users().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn remove_all_drops_every_match_and_keeps_survivor_order() {
        let mut store = InMemoryUserStore::from_users(vec![
            user("a", "first"),
            user("x", "dup-1"),
            user("b", "second"),
            user("x", "dup-2"),
            user("c", "third"),
        ]);

        assert_eq!(store.remove_all("x"), 2);
        let ids: Vec<&str> = store.users().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_all_reports_zero_for_missing_id() {
        let mut store = InMemoryUserStore::from_users(vec![user("a", "first")]);
        assert_eq!(store.remove_all("missing"), 0);
        assert_eq!(store.len(), 1);
    }

    fn push_through<S: UserStore>(mut store: S, user: User) -> usize {
        store.push(user);
        store.len()
    }

    #[test]
    fn borrowed_store_writes_through() {
        let mut owned = InMemoryUserStore::new();
        assert_eq!(push_through(&mut owned, user("1", "alice")), 1);
        assert_eq!(owned.into_users(), vec![user("1", "alice")]);
    }
}
