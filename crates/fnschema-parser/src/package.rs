//! Loading a Go package directory into analyzed units.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use fnschema_core::{SourceUnit, TypeDecl};

use crate::error::ParserError;
use crate::{go, parser};

/// Which files of a package directory are analyzed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Also analyze `_test.go` files.
    pub include_tests: bool,
}

/// An analyzed Go package: its units in file-name order plus an index of
/// package-level type declarations.
#[derive(Debug, Clone, Default)]
pub struct SourcePackage {
    pub(crate) units: Vec<SourceUnit>,
    pub(crate) types: HashMap<String, TypeDecl>,
}

impl SourcePackage {
    /// Load every Go source file directly inside `dir`.
    ///
    /// Files are read in lexicographic order. Like the go tool, names
    /// starting with `_` or `.` are ignored, and `_test.go` files are
    /// skipped unless [`LoadOptions::include_tests`] is set.
    ///
    /// # Errors
    /// Returns `ParserError::Io` if the directory or a file cannot be read,
    /// `ParserError::NoSources` if no file qualifies, and
    /// `ParserError::Syntax` for the first file that does not parse.
    pub fn load(dir: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, ParserError> {
        let dir = dir.as_ref();
        let io_error = |path: &Path| {
            let path = path.display().to_string();
            move |source| ParserError::Io { path, source }
        };

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_error(dir))? {
            let path = entry.map_err(io_error(dir))?.path();
            if path.is_file() && is_go_source(&path, options) {
                files.push(path);
            }
        }
        files.sort();

        if files.is_empty() {
            return Err(ParserError::NoSources(dir.display().to_string()));
        }
        tracing::debug!(dir = %dir.display(), files = files.len(), "loading Go package");

        let mut sources = Vec::with_capacity(files.len());
        for path in files {
            let text = std::fs::read_to_string(&path).map_err(io_error(&path))?;
            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            sources.push((name, text));
        }
        Self::from_sources(sources)
    }

    /// Analyze in-memory sources given as `(file name, text)` pairs, in order.
    ///
    /// # Errors
    /// Returns `ParserError::Syntax` for the first source that does not parse.
    pub fn from_sources<I, N, S>(sources: I) -> Result<Self, ParserError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: AsRef<str>,
    {
        let mut units = Vec::new();
        for (name, text) in sources {
            let name = name.into();
            let tree = parser::parse_source(text.as_ref());
            if let Some((line, detail)) = parser::first_syntax_error(&tree.root()) {
                return Err(ParserError::Syntax {
                    file: name,
                    line,
                    detail,
                });
            }
            units.push(go::extract_unit(&tree, &name));
        }
        Ok(Self::from_units(units))
    }

    /// Build a package from already extracted units.
    ///
    /// When a type name is declared more than once the first declaration
    /// in unit order wins.
    #[must_use]
    pub fn from_units(units: Vec<SourceUnit>) -> Self {
        let mut types = HashMap::new();
        for decl in units.iter().flat_map(SourceUnit::types) {
            types
                .entry(decl.name.clone())
                .or_insert_with(|| decl.clone());
        }
        Self { units, types }
    }

    /// Package-level type declaration by name.
    #[must_use]
    pub fn type_decl(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }
}

fn is_go_source(path: &Path, options: &LoadOptions) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if !name.ends_with(".go") || name.starts_with('_') || name.starts_with('.') {
        return false;
    }
    options.include_tests || !name.ends_with("_test.go")
}
