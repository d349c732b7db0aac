//! Utilities
pub mod array;
