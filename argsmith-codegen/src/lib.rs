//! Shared code generation utilities for argsmith.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific emitters (e.g., `argsmith-codegen-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, PreviewFile)

pub mod builder;
pub mod language;

pub use language::{LanguageCodegen, PreviewFile};
