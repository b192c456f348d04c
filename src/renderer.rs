//! Rendering of individual string leaves.
//!
//! - `interface`: the `TemplateRenderer` trait the engine depends on
//! - `minijinja`: the MiniJinja-backed implementation
//! - `filters`: extra filters registered in the MiniJinja environment

pub mod filters;
pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;
