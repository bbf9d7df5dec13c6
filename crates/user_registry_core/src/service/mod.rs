//! Core use-case services.
//!
//! # Responsibility
//! - Compose store primitives into the registry's caller-facing API.
//! - Keep callers decoupled from the concrete store.

pub mod user_manager;
