//! User record.
//!
//! # Responsibility
//! - Define the canonical record held by the registry.
//!
//! # Invariants
//! - `id` is opaque and caller-supplied; duplicates are representable.
//! - `created_at` is caller-supplied and never stamped by the registry.

use serde::{Deserialize, Serialize};

/// Opaque, caller-supplied user identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = String;

/// One registered person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Lookup and delete key. Not checked for uniqueness.
    pub id: UserId,
    /// Display name, unconstrained.
    pub name: String,
    /// Contact address. No format validation is performed.
    pub email: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl User {
    /// Creates a record from caller-provided fields as-is.
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            created_at,
        }
    }
}
