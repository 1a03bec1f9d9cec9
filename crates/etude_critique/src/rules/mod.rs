//! Lint rules for Vue single-file components.

pub mod script;
pub mod template;
