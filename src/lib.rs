//! Builds a flat-text album manifest from a tree of tagged audio files, plus
//! the two helpers used to prepare that tree: cover-art extraction and
//! filename normalization.

pub mod config;
pub mod cover;
pub mod error;
pub mod library;
pub mod logging;
pub mod manifest;
pub mod rename;
pub mod runtime;

#[cfg(test)]
mod test_support;
