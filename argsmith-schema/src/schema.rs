//! Ordered argument collection.

use std::path::Path;

use indexmap::IndexMap;

use crate::{ArgumentSpec, Error, Result, reader::parse_str};

/// A later row that replaced an earlier argument with the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub name: String,
    /// Line of the first declaration
    pub first_line: usize,
    /// Line of the declaration that won
    pub line: usize,
}

/// The arguments of one generation run, in declaration order.
///
/// Names are unique. Inserting a name again replaces the whole
/// [`ArgumentSpec`] but keeps the position of the first declaration.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    args: IndexMap<String, ArgumentSpec>,
    overrides: Vec<Override>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an argument list file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_str(&content, &path.display().to_string())
    }

    /// Insert an argument, returning the one it replaced.
    pub fn insert(&mut self, spec: ArgumentSpec) -> Option<ArgumentSpec> {
        self.args.insert(spec.name.clone(), spec)
    }

    pub(crate) fn record_override(&mut self, name: &str, first_line: usize, line: usize) {
        self.overrides.push(Override {
            name: name.to_string(),
            first_line,
            line,
        });
    }

    /// Look up an argument by name.
    pub fn get(&self, name: &str) -> Option<&ArgumentSpec> {
        self.args.get(name)
    }

    /// Iterate arguments in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ArgumentSpec> {
        self.args.values()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Duplicate declarations seen while reading, in file order.
    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }
}

impl FromIterator<ArgumentSpec> for Schema {
    fn from_iter<I: IntoIterator<Item = ArgumentSpec>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for spec in iter {
            schema.insert(spec);
        }
        schema
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a ArgumentSpec;
    type IntoIter = indexmap::map::Values<'a, String, ArgumentSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.values()
    }
}
