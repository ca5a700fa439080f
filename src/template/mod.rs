//! Prompt template subsystem.
//!
//! This module provides:
//!
//! - **Store**: resolves template names to file-backed text
//! - **Substitute**: `{NAME}` placeholder substitution
//! - **Sections**: extraction of `{TAG}...{TAG_END}` blocks
//!
//! # Template Syntax
//!
//! ```text
//! {SYSTEM_CONFIG}
//! You write R code using the {LIBRARY} package.
//! {SYSTEM_CONFIG_END}
//!
//! {USER_CONFIG}
//! Simulate an addition circuit.
//! {USER_CONFIG_END}
//! ```
//!
//! Placeholders without a binding are left as-is, so section markers survive
//! substitution untouched.

mod sections;
mod store;
mod substitute;

pub use sections::extract_sections;
pub use store::{DEFAULT_EXTENSION, Template, TemplateStore};
pub use substitute::{Bindings, substitute};
