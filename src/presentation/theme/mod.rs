//! Colour theme.

/// Colour space conversions.
pub mod adapter;
mod service;

pub use service::Theme;
