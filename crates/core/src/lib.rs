//! Mango Market Core - Shared types library.
//!
//! This crate provides common types used across all Mango Market console
//! components:
//! - `client` - REST client for the marketplace backend
//! - `cli` - Operator-facing console binary
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no filesystem access. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, workflow statuses, money
//!   arithmetic, and image-list partitioning

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
