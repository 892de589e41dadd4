//! # Story Catalog
//!
//! The content table for Kalaido - a fixed, read-only collection of cultures
//! and the first-person stories they own. Loaded once at startup and never
//! mutated afterwards; every other part of the app treats this crate as a
//! content provider.
//!
//! ## Core Components
//!
//! - **story**: `Story` and its gradient color type, with safe indexed access
//! - **culture**: `Culture`, the exclusive owner of an ordered story list
//! - **catalog**: `Catalog` queries - ordered cultures, flattened stories, reverse lookup
//! - **data**: the built-in content table

pub mod catalog;
pub mod culture;
pub mod data;
pub mod story;

pub use catalog::*;
pub use culture::*;
pub use story::*;
