//! Per-argument validation procedures.
//!
//! Every procedure reads the stored value as text and then runs the enabled
//! clauses in a fixed order. Clauses only print; they never throw or exit.
//! The presence clause fires on an empty value, the filesystem clauses only
//! on a non-empty one.

use argsmith_codegen::builder::CodeBuilder;
use argsmith_core::{NameError, accessor_suffix};
use argsmith_schema::ArgumentSpec;

use crate::literal::string_literal;

/// One independently gated check inside a validation procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Mandatory,
    Existing,
    ReadAccess,
    WriteAccess,
}

impl Clause {
    /// Emission order.
    pub const ALL: [Clause; 4] = [
        Clause::Mandatory,
        Clause::Existing,
        Clause::ReadAccess,
        Clause::WriteAccess,
    ];

    /// Whether `spec` asks for this clause.
    pub fn enabled_for(&self, spec: &ArgumentSpec) -> bool {
        match self {
            Clause::Mandatory => spec.is_mandatory,
            Clause::Existing => spec.check_existing,
            Clause::ReadAccess => spec.check_read_access,
            Clause::WriteAccess => spec.check_write_access,
        }
    }

    /// The clauses `spec` asks for, in emission order.
    pub fn for_spec(spec: &ArgumentSpec) -> Vec<Clause> {
        Self::ALL
            .into_iter()
            .filter(|clause| clause.enabled_for(spec))
            .collect()
    }

    fn condition(&self) -> &'static str {
        match self {
            Clause::Mandatory => "value.isEmpty()",
            Clause::Existing | Clause::ReadAccess | Clause::WriteAccess => "!value.isEmpty()",
        }
    }

    fn report(&self, name: &str) -> String {
        let (label, method) = match self {
            Clause::Mandatory => {
                let msg = string_literal(&format!("parameter {} is not passed", name));
                return format!("System.out.println({});", msg);
            }
            Clause::Existing => (format!("file {} exists? ", name), "exists"),
            Clause::ReadAccess => (format!("file {} has read access? ", name), "canRead"),
            Clause::WriteAccess => (format!("file {} has write access? ", name), "canWrite"),
        };
        format!(
            "System.out.println({} + new File(value).{}());",
            string_literal(&label),
            method
        )
    }
}

/// Write the body of `spec`'s validation procedure at the current indent.
pub fn write_validation(b: &mut CodeBuilder, spec: &ArgumentSpec, suffix: &str) {
    b.push_line(&format!(
        "String value = Objects.toString(get{}(), \"\");",
        suffix
    ));
    for clause in Clause::for_spec(spec) {
        b.push_block(&format!("if ({}) {{", clause.condition()), "}", |b| {
            b.push_line(&clause.report(&spec.name));
        });
    }
}

/// Render the body of `spec`'s validation procedure.
pub fn emit_validation(spec: &ArgumentSpec) -> Result<String, NameError> {
    let suffix = accessor_suffix(&spec.name)?;
    let mut b = CodeBuilder::java();
    write_validation(&mut b, spec, &suffix);
    Ok(b.build())
}
