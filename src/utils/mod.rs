//! Utility functions and helpers

pub mod text;

pub use text::contains_ignore_case;
