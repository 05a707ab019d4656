//! Core types for Mango Market.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod image;
pub mod money;
pub mod status;

pub use id::*;
pub use image::{ImagePartition, ImageSource, ImageUpload, MAX_UPLOAD_BYTES, partition_images};
pub use money::{line_total, order_total};
pub use status::*;
