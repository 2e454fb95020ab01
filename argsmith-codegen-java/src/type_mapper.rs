//! Java type mapper implementation.

use argsmith_core::{ArgType, TypeMapper};

/// Java type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeMapper;

impl TypeMapper for JavaTypeMapper {
    fn language(&self) -> &'static str {
        "java"
    }

    fn map_arg_type(&self, arg_type: ArgType) -> &'static str {
        match arg_type {
            ArgType::String => "String",
            ArgType::File => "File",
            ArgType::Path => "Path",
            ArgType::Flag => "Boolean",
            ArgType::Other => "Object",
        }
    }

    fn convert_expr(&self, arg_type: ArgType, value: &str) -> String {
        match arg_type {
            ArgType::String | ArgType::Other => value.to_string(),
            ArgType::File => format!("new File({})", value),
            ArgType::Path => format!("Paths.get({})", value),
            // An empty token leaves the flag unset so presence checks can see it.
            ArgType::Flag => format!("{0}.isEmpty() ? null : Boolean.valueOf({0})", value),
        }
    }
}
