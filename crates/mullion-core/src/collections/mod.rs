//! Optimized collection types for mullion.
//!
//! This module provides:
//! - The capacity-bounded [`BoundedVec`] container
//! - Re-exports of optimized hash collections using AHash

pub mod bounded;

pub use bounded::{BoundedVec, CapacityError, DEFAULT_CAPACITY};

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
