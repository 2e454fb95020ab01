//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Line buffer that tracks nested block indentation

mod code_builder;

pub use code_builder::CodeBuilder;
