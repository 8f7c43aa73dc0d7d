//! InkSaver - print-friendly document conversion.
//!
//! HTTP service that turns photographed documents into pure black-and-white
//! JPEGs via luma thresholding. This library exposes modules for
//! integration testing.

pub mod api;
pub mod error;
pub mod processing;
pub mod server;
