//! Check operation - argument list validation.

use std::path::Path;

use argsmith_codegen_java::{Clause, JavaTypeMapper};
use argsmith_core::TypeMapper;
use argsmith_schema::{ArgumentSpec, Schema};

use crate::reports::{ArgumentInfo, CheckReport};

/// Execute the check operation.
///
/// Collects per-argument information and lint warnings. Warnings never
/// block generation.
pub fn check(schema: &Schema, path: &Path) -> CheckReport {
    let mapper = JavaTypeMapper;
    let mut warnings = Vec::new();

    for dup in schema.overrides() {
        warnings.push(format!(
            "argument '{}' on line {} replaces the one declared on line {}",
            dup.name, dup.line, dup.first_line
        ));
    }

    let arguments = schema
        .iter()
        .map(|spec| {
            warnings.extend(lint(spec, &mapper));
            ArgumentInfo {
                name: spec.name.clone(),
                type_token: spec.type_token.clone(),
                java_type: mapper.map_token(&spec.type_token),
                checks: Clause::for_spec(spec).into_iter().map(clause_label).collect(),
            }
        })
        .collect();

    CheckReport {
        path: path.to_path_buf(),
        arguments,
        warnings,
    }
}

fn lint(spec: &ArgumentSpec, mapper: &JavaTypeMapper) -> Vec<String> {
    let mut warnings = Vec::new();
    let arg_type = spec.arg_type();

    if arg_type.is_fallback() {
        warnings.push(format!(
            "argument '{}' has unknown type '{}', falling back to {}",
            spec.name,
            spec.type_token,
            mapper.map_arg_type(arg_type)
        ));
    }
    if spec.has_filesystem_checks() && !arg_type.is_filesystem() {
        warnings.push(format!(
            "argument '{}' requests filesystem checks but has type '{}'",
            spec.name, spec.type_token
        ));
    }
    warnings
}

fn clause_label(clause: Clause) -> &'static str {
    match clause {
        Clause::Mandatory => "mandatory",
        Clause::Existing => "existing",
        Clause::ReadAccess => "readable",
        Clause::WriteAccess => "writable",
    }
}
