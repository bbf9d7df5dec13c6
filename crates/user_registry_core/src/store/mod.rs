//! Backing store contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the ordered sequence contract the manager mutates.
//! - Keep collection details out of the service layer.
//!
//! # Invariants
//! - Insertion order is preserved by every store operation.
//! - Stores never validate or deduplicate records.

pub mod user_store;
