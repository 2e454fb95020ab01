//! Argument list parsing for argsmith.
//!
//! An argument list is a comma-separated table with a header row followed by
//! one row per command-line argument:
//!
//! ```text
//! name,type,isMandatory,checkExisting,checkReadAccess,checkWriteAccess
//! inputFile,file,Yes,Yes,Yes,No
//! verbose,flag,No,No,No,No
//! ```
//!
//! Parsing produces a [`Schema`]: an insertion-ordered collection of
//! [`ArgumentSpec`] values keyed by argument name.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod reader;
mod schema;
mod spec;

pub use error::{Error, Result, SourceContext};
pub use reader::{COLUMNS, parse_str};
pub use schema::{Override, Schema};
pub use spec::{ArgumentSpec, parse_flag};
