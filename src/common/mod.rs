//! Shared utilities used across the crate

/// Reactive property system for fine-grained state updates
pub mod property;

pub use property::Property;
