//! Domain model for the user registry.
//!
//! # Responsibility
//! - Define the record shape every registry operation works on.
//!
//! # Invariants
//! - Records are caller-built; the model performs no validation or
//!   uniqueness checks.

pub mod user;
