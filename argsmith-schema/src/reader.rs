//! Argument list parsing from strings.

use std::{collections::HashMap, str::FromStr};

use argsmith_core::is_identifier;

use crate::{ArgumentSpec, Error, Result, Schema, SourceContext, spec::parse_flag};

/// Number of columns every argument row must have.
pub const COLUMNS: usize = 6;

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_str(s, "arguments.csv")
    }
}

/// Parse an argument list, using `filename` for error reporting.
///
/// The first line is a header and is skipped. Blank lines are ignored.
/// Every other line must split into exactly [`COLUMNS`] comma-separated
/// fields; empty trailing fields count.
pub fn parse_str(content: &str, filename: &str) -> Result<Schema> {
    let ctx = SourceContext::new(content, filename);
    let mut schema = Schema::new();
    let mut first_lines: HashMap<String, usize> = HashMap::new();
    let mut offset = 0;

    for (index, raw) in content.split('\n').enumerate() {
        let start = offset;
        offset += raw.len() + 1;

        let line = index + 1;
        let row = raw.strip_suffix('\r').unwrap_or(raw);
        if line == 1 || row.trim().is_empty() {
            continue;
        }

        let span = (start, row.len());
        let spec = parse_row(row).map_err(|reason| ctx.malformed_row(line, row, reason, span))?;

        match first_lines.get(&spec.name) {
            Some(&first) => schema.record_override(&spec.name, first, line),
            None => {
                first_lines.insert(spec.name.clone(), line);
            }
        }
        schema.insert(spec);
    }

    Ok(schema)
}

fn parse_row(row: &str) -> std::result::Result<ArgumentSpec, String> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if fields.len() != COLUMNS {
        return Err(format!(
            "expected {} columns, found {}",
            COLUMNS,
            fields.len()
        ));
    }
    if fields[0].is_empty() {
        return Err("argument name is empty".to_string());
    }
    if !is_identifier(fields[0]) {
        return Err(format!("argument name '{}' is not an identifier", fields[0]));
    }

    Ok(ArgumentSpec {
        name: fields[0].to_string(),
        type_token: fields[1].to_string(),
        is_mandatory: parse_flag(fields[2]),
        check_existing: parse_flag(fields[3]),
        check_read_access: parse_flag(fields[4]),
        check_write_access: parse_flag(fields[5]),
    })
}
