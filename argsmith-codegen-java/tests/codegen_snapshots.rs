//! Snapshot tests for Java code generation.
//!
//! These tests verify that the generated class matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use argsmith_codegen_java::{EmitOptions, Generator, LanguageCodegen, emit};
use argsmith_schema::Schema;
use tempfile::TempDir;

const HEADER: &str = "name,type,isMandatory,checkExisting,checkReadAccess,checkWriteAccess";

/// Parse an argument list made of the standard header plus `rows`.
fn schema(rows: &[&str]) -> Schema {
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.parse().expect("Failed to parse argument list")
}

/// Extract the body of `private void validate<suffix>()`.
fn validator_body<'a>(output: &'a str, suffix: &str) -> &'a str {
    let header = format!("    private void validate{}() {{\n", suffix);
    let start = output.find(&header).expect("validator not found") + header.len();
    let len = output[start..].find("\n    }\n").expect("validator not closed");
    &output[start..start + len]
}

fn scenario() -> Schema {
    schema(&["inputFile,file,Yes,Yes,Yes,No", "verbose,flag,No,No,No,No"])
}

#[test]
fn test_scenario_snapshot() {
    let output = emit(&scenario(), "java", "=").unwrap();
    insta::assert_snapshot!("processor_scenario", output);
}

#[test]
fn test_scenario_members() {
    let output = emit(&scenario(), "java", "=").unwrap();

    assert!(output.contains("private File inputFile;"));
    assert!(output.contains("private Boolean verbose;"));
    assert!(output.contains("public void setInputFile(File inputFile) {"));
    assert!(output.contains("public File getInputFile() {"));
    assert!(output.contains("public void setVerbose(Boolean verbose) {"));
    assert!(output.contains("public Boolean getVerbose() {"));
    assert!(output.contains(r#"handlers.put("-inputFile", value -> {"#));
    assert!(output.contains(r#"handlers.put("-verbose", value -> {"#));
}

#[test]
fn test_scenario_validators() {
    let output = emit(&scenario(), "java", "=").unwrap();

    let input = validator_body(&output, "InputFile");
    assert!(input.contains("parameter inputFile is not passed"));
    assert!(input.contains("exists()"));
    assert!(input.contains("canRead()"));
    assert!(!input.contains("canWrite()"));

    let verbose = validator_body(&output, "Verbose");
    assert!(!verbose.contains("System.out.println"));
    assert!(!verbose.contains("if ("));
}

#[test]
fn test_mandatory_flag_can_report_missing() {
    let output = emit(&schema(&["verbose,flag,Yes,No,No,No"]), "java", "=").unwrap();

    // An empty token must leave the field null, not `false`.
    assert!(output.contains("private Boolean verbose;"));
    assert!(output.contains("setVerbose(value.isEmpty() ? null : Boolean.valueOf(value));"));

    let body = validator_body(&output, "Verbose");
    assert_eq!(
        body,
        "        String value = Objects.toString(getVerbose(), \"\");\n        \
         if (value.isEmpty()) {\n            \
         System.out.println(\"parameter verbose is not passed\");\n        \
         }"
    );
}

#[test]
fn test_member_counts_follow_schema_order() {
    let names = ["zulu", "alpha", "mike", "bravo", "yankee"];
    let rows: Vec<String> = names
        .iter()
        .map(|n| format!("{},string,No,No,No,No", n))
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let output = emit(&schema(&rows), "java", "=").unwrap();

    assert_eq!(output.matches("    private String ").count(), names.len());
    assert_eq!(output.matches("public void set").count(), names.len());
    assert_eq!(output.matches("public String get").count(), names.len());
    assert_eq!(output.matches("handlers.put(").count(), names.len());
    assert_eq!(output.matches("private void validate").count(), names.len());

    for needle in [
        "private String {};",
        "handlers.put(\"-{}\"",
        "public void set{}(",
        "public String get{}(",
        "private void validate{}(",
    ] {
        let positions: Vec<usize> = names
            .iter()
            .map(|name| {
                let name = if needle.contains("-{}") || needle.starts_with("private String") {
                    name.to_string()
                } else {
                    let mut c = name.chars();
                    let first = c.next().unwrap().to_ascii_uppercase();
                    std::iter::once(first).chain(c).collect()
                };
                output
                    .find(&needle.replace("{}", &name))
                    .unwrap_or_else(|| panic!("missing {}", needle.replace("{}", &name)))
            })
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "{} out of order",
            needle
        );
    }
}

#[test]
fn test_separator_changes_only_split_literal() {
    let schema = scenario();
    let equals = emit(&schema, "java", "=").unwrap();
    let colons = emit(&schema, "java", "::").unwrap();

    assert_ne!(equals, colons);
    assert_eq!(
        equals.replace(r#"Pattern.quote("=")"#, r#"Pattern.quote("::")"#),
        colons
    );
}

#[test]
fn test_type_tokens_case_insensitive() {
    let lower = emit(&schema(&["a,file,No,No,No,No"]), "java", "=").unwrap();
    let upper = emit(&schema(&["a,FILE,No,No,No,No"]), "java", "=").unwrap();

    assert_eq!(lower, upper);
}

#[test]
fn test_unknown_type_falls_back_to_object() {
    let output = emit(&schema(&["count,integer,No,No,No,No"]), "java", "=").unwrap();

    assert!(output.contains("private Object count;"));
    assert!(output.contains("public Object getCount() {"));
}

#[test]
fn test_duplicate_name_last_row_wins() {
    let output = emit(
        &schema(&["target,file,Yes,Yes,No,No", "target,flag,No,No,No,Yes"]),
        "java",
        "=",
    )
    .unwrap();

    assert!(output.contains("private Boolean target;"));
    assert!(!output.contains("private File target;"));
    assert_eq!(output.matches("handlers.put(").count(), 1);

    let body = validator_body(&output, "Target");
    assert!(body.contains("canWrite()"));
    assert!(!body.contains("is not passed"));
    assert!(!body.contains("exists()"));
}

#[test]
fn test_malformed_row_blocks_generation() {
    let content = format!("{HEADER}\ninputFile,file,Yes,Yes,Yes\n");
    let result: Result<Schema, _> = content.parse();

    assert!(result.is_err());
}

#[test]
fn test_generate_writes_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out").join("CmdArgProcessor.java");
    let schema = scenario();
    let generator = Generator::new(&schema, EmitOptions::new("java", "="));

    let file = generator.generate(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, file.content);
    assert_eq!(written, emit(&schema, "java", "=").unwrap());
}

#[test]
fn test_preview_does_not_write() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Preview.java");
    let schema = scenario();
    let generator = Generator::new(&schema, EmitOptions::default());

    let file = generator.preview(&path).unwrap();

    assert!(!path.exists());
    assert!(file.content.contains("public class CmdArgProcessor"));
}

#[test]
fn test_generate_reports_write_failure() {
    let temp = TempDir::new().unwrap();
    let schema = scenario();
    let generator = Generator::new(&schema, EmitOptions::default());

    // The destination is an existing directory.
    let err = generator.generate(temp.path()).unwrap_err();
    assert!(err.to_string().contains("failed to write"));
}
