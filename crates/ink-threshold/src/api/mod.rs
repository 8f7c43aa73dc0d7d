//! Public API for the ink-threshold crate.
//!
//! This module provides the high-level entry point: the [`Binarizer`]
//! builder.

mod builder;

pub use builder::Binarizer;
