//! Java argument-processor class emitter.

use std::path::Path;

use argsmith_codegen::{LanguageCodegen, PreviewFile, builder::CodeBuilder};
use argsmith_core::{GeneratedFile, TypeMapper, accessor_suffix, is_identifier};
use argsmith_schema::{ArgumentSpec, Schema};
use eyre::{Result, WrapErr, bail};

use crate::{
    files::ProcessorFile, literal::string_literal, preamble::imports_for,
    type_mapper::JavaTypeMapper, validator::write_validation,
};

/// Class name used when none is configured.
pub const DEFAULT_CLASS_NAME: &str = "CmdArgProcessor";

/// Settings for one emission run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Target language tag; selects the preamble
    pub language: String,
    /// Literal splitting `-name` from its value in each token
    pub separator: String,
    /// Name of the generated class
    pub class_name: String,
}

impl EmitOptions {
    pub fn new(language: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            separator: separator.into(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self::new("java", "=")
    }
}

/// An argument with its derived names resolved.
struct Resolved<'a> {
    spec: &'a ArgumentSpec,
    suffix: String,
    java_type: &'static str,
    conversion: String,
}

/// Java code generator that produces a single argument-processor class.
pub struct Generator<'a> {
    schema: &'a Schema,
    options: EmitOptions,
    mapper: JavaTypeMapper,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        self.mapper.language()
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self, output: &Path) -> Result<PreviewFile> {
        let file = ProcessorFile::new(output, self.render()?);
        Ok(file.preview())
    }

    fn generate(&self, output: &Path) -> Result<PreviewFile> {
        let file = ProcessorFile::new(output, self.render()?);
        file.write()?;
        tracing::debug!(path = %output.display(), "wrote processor class");
        Ok(file.preview())
    }
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema, options: EmitOptions) -> Self {
        Self {
            schema,
            options,
            mapper: JavaTypeMapper,
        }
    }

    /// Render the complete class source.
    ///
    /// Fails before producing any text if an argument name is empty or the
    /// class name is not a Java identifier.
    pub fn render(&self) -> Result<String> {
        validate_class_name(&self.options.class_name)?;
        let args = self.resolve()?;
        let class = self.options.class_name.as_str();

        let mut b = CodeBuilder::java();
        self.write_preamble(&mut b);

        b.push_block(&format!("public class {} {{", class), "}", |b| {
            b.push_blank();
            write_entry_stub(b, class);
            b.push_blank();
            write_fields(b, &args);
            b.push_blank();
            write_constructor(b, class, &args);
            write_setters(b, &args);
            write_getters(b, &args);
            self.write_process(b);
            write_validators(b, &args);
        });

        tracing::debug!(
            class,
            arguments = args.len(),
            separator = %self.options.separator,
            "rendered processor class"
        );
        Ok(b.build())
    }

    fn resolve(&self) -> Result<Vec<Resolved<'a>>> {
        self.schema
            .iter()
            .enumerate()
            .map(|(index, spec)| -> Result<Resolved<'a>> {
                let suffix = accessor_suffix(&spec.name)
                    .wrap_err_with(|| format!("argument #{} has no usable name", index + 1))?;
                if !is_identifier(&spec.name) {
                    bail!("argument #{} name '{}' is not an identifier", index + 1, spec.name);
                }
                let arg_type = spec.arg_type();
                Ok(Resolved {
                    spec,
                    suffix,
                    java_type: self.mapper.map_arg_type(arg_type),
                    conversion: self.mapper.convert_expr(arg_type, "value"),
                })
            })
            .collect()
    }

    fn write_preamble(&self, b: &mut CodeBuilder) {
        match imports_for(&self.options.language) {
            Some(imports) => {
                for import in imports {
                    b.push_line(import);
                }
                b.push_blank();
            }
            None => tracing::warn!(
                language = %self.options.language,
                "unknown class language, emitting no imports"
            ),
        }
    }

    fn write_process(&self, b: &mut CodeBuilder) {
        let separator = string_literal(&self.options.separator);
        b.push_block("public void process(String[] args) {", "}", |b| {
            b.push_block("for (String arg : args) {", "}", |b| {
                b.push_line(&format!(
                    "String[] parts = arg.split(Pattern.quote({}), 2);",
                    separator
                ));
                b.push_block("if (parts.length != 2) {", "}", |b| {
                    b.push_line("continue;");
                });
                b.push_line("Consumer<String> handler = handlers.get(parts[0]);");
                b.push_block("if (handler == null) {", "}", |b| {
                    b.push_line("continue;");
                });
                b.push_line("handler.accept(parts[1]);");
            });
        });
        b.push_blank();
    }
}

/// Emit the class for `schema` with the default class name.
pub fn emit(schema: &Schema, language: &str, separator: &str) -> Result<String> {
    Generator::new(schema, EmitOptions::new(language, separator)).render()
}

fn validate_class_name(name: &str) -> Result<()> {
    if !is_identifier(name) {
        bail!("invalid class name '{}'", name);
    }
    Ok(())
}

fn write_entry_stub(b: &mut CodeBuilder, class: &str) {
    b.push_block("public static void main(String[] args) {", "}", |b| {
        b.push_line(&format!("{} processor = new {}();", class, class));
        b.push_line("processor.process(args);");
    });
}

fn write_fields(b: &mut CodeBuilder, args: &[Resolved<'_>]) {
    for arg in args {
        b.push_line(&format!("private {} {};", arg.java_type, arg.spec.name));
    }
    b.push_line("private final Map<String, Consumer<String>> handlers = new LinkedHashMap<>();");
}

fn write_constructor(b: &mut CodeBuilder, class: &str, args: &[Resolved<'_>]) {
    b.push_block(&format!("public {}() {{", class), "}", |b| {
        for arg in args {
            let key = string_literal(&arg.spec.dispatch_key());
            b.push_block(&format!("handlers.put({}, value -> {{", key), "});", |b| {
                b.push_line(&format!("set{}({});", arg.suffix, arg.conversion));
                b.push_line(&format!("validate{}();", arg.suffix));
            });
        }
    });
    b.push_blank();
}

fn write_setters(b: &mut CodeBuilder, args: &[Resolved<'_>]) {
    for arg in args {
        let name = &arg.spec.name;
        let header = format!(
            "public void set{}({} {}) {{",
            arg.suffix, arg.java_type, name
        );
        b.push_block(&header, "}", |b| {
            b.push_line(&format!("this.{} = {};", name, name));
        });
        b.push_blank();
    }
}

fn write_getters(b: &mut CodeBuilder, args: &[Resolved<'_>]) {
    for arg in args {
        let header = format!("public {} get{}() {{", arg.java_type, arg.suffix);
        b.push_block(&header, "}", |b| {
            b.push_line(&format!("return {};", arg.spec.name));
        });
        b.push_blank();
    }
}

fn write_validators(b: &mut CodeBuilder, args: &[Resolved<'_>]) {
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            b.push_blank();
        }
        let header = format!("private void validate{}() {{", arg.suffix);
        b.push_block(&header, "}", |b| write_validation(b, arg.spec, &arg.suffix));
    }
}
