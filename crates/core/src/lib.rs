//! Storeboard Core - Shared types library.
//!
//! This crate provides common types used across all Storeboard components:
//! - `server` - The store-rating dashboard web service
//! - `integration-tests` - End-to-end test suite
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no async. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, scores, and roles
//! - [`authz`] - Role-based route authorization as a pure, testable function

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod authz;
pub mod types;

pub use authz::*;
pub use types::*;
