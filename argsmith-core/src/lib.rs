//! Core utilities and types for the argsmith generator.
//!
//! This crate provides the fundamental, language-agnostic pieces shared by
//! the schema reader and the language-specific emitters.

mod file;
mod naming;
mod type_mapper;

// File operations
pub use file::{GeneratedFile, write_file};
// Identifier derivation
pub use naming::{NameError, accessor_suffix, is_identifier};
// Fundamental types
pub use type_mapper::{ArgType, TypeMapper};
