//! helmtpl renders YAML documents whose string values contain template
//! directives, using variables stored in the same document.

/// Handles argument parsing and the file-to-file run.
pub mod cli;

/// Shared constants.
pub mod constants;

/// Decoding, variable extraction, tree rendering and encoding.
pub mod engine;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template string rendering.
pub mod renderer;

pub use engine::Engine;
