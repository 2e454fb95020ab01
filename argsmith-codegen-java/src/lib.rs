//! Java emitter for argsmith.
//!
//! Turns a [`Schema`](argsmith_schema::Schema) into the source of a single
//! Java class that stores each argument in a field, exposes accessors,
//! dispatches `-name<sep>value` tokens through a lookup table and runs a
//! diagnostic validation procedure per argument.

mod generator;
mod literal;
mod preamble;
mod type_mapper;
mod validator;

pub mod files;

pub use argsmith_codegen::{LanguageCodegen, PreviewFile};
pub use generator::{DEFAULT_CLASS_NAME, EmitOptions, Generator, emit};
pub use literal::string_literal;
pub use preamble::{JAVA_IMPORTS, imports_for, is_known_language};
pub use type_mapper::JavaTypeMapper;
pub use validator::{Clause, emit_validation, write_validation};
