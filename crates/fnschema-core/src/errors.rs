//! Error taxonomy for translating a function into a parameter schema.
//!
//! Unsupported type shapes are not errors: they become `null` schema leaves.
//! Everything here aborts the whole translation.

use thiserror::Error;

/// Errors that abort a translation. No partial result is produced.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// No analyzed unit declares a top-level function with this name.
    #[error("function not found: {0}")]
    FunctionNotFound(String),

    /// Several declarations share the name and duplicates are rejected.
    /// `locations` holds `unit:line` for each of them.
    #[error("function '{name}' is declared more than once (at {})", .locations.join(", "))]
    AmbiguousFunction { name: String, locations: Vec<String> },

    /// The source-analysis provider could not load or parse the source.
    #[error("source analysis failed: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A declarative `enum`/`required` tag could not be parsed.
    #[error("malformed tag on '{field}': {reason}")]
    TagSyntax { field: String, reason: String },

    /// A type name is declared nowhere in the analyzed source.
    #[error("cannot resolve type '{0}'")]
    UnresolvedType(String),

    /// A struct type refers back to itself and cycles are rejected.
    #[error("recursive type '{0}' cannot be expanded")]
    RecursiveType(String),

    /// Translating one parameter failed.
    #[error("issue parsing parameter '{parameter}': {source}")]
    Parameter {
        parameter: String,
        #[source]
        source: Box<SchemaError>,
    },
}

/// Coarse failure classes callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Ambiguous,
    Provider,
    TagSyntax,
    TypeResolution,
    RecursiveType,
}

impl SchemaError {
    /// Wrap any provider diagnostic.
    pub fn provider(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Provider(error.into())
    }

    /// Failure class of the innermost error, looking through
    /// [`SchemaError::Parameter`] wrappers.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FunctionNotFound(_) => ErrorKind::NotFound,
            Self::AmbiguousFunction { .. } => ErrorKind::Ambiguous,
            Self::Provider(_) => ErrorKind::Provider,
            Self::TagSyntax { .. } => ErrorKind::TagSyntax,
            Self::UnresolvedType(_) => ErrorKind::TypeResolution,
            Self::RecursiveType(_) => ErrorKind::RecursiveType,
            Self::Parameter { source, .. } => source.kind(),
        }
    }

    /// Name of the parameter the failure occurred in, if any.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::Parameter { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_looks_through_parameter_wrapper() {
        let error = SchemaError::Parameter {
            parameter: "opts".to_string(),
            source: Box::new(SchemaError::TagSyntax {
                field: "Mode".to_string(),
                reason: "bad syntax for struct tag value".to_string(),
            }),
        };
        assert_eq!(error.kind(), ErrorKind::TagSyntax);
        assert_eq!(error.parameter(), Some("opts"));
        assert_eq!(
            error.to_string(),
            "issue parsing parameter 'opts': malformed tag on 'Mode': bad syntax for struct tag value"
        );
    }

    #[test]
    fn provider_wraps_diagnostic_text() {
        let error = SchemaError::provider("no Go files in /tmp/empty");
        assert_eq!(error.kind(), ErrorKind::Provider);
        assert_eq!(error.to_string(), "source analysis failed: no Go files in /tmp/empty");
    }

    #[test]
    fn ambiguous_lists_units() {
        let error = SchemaError::AmbiguousFunction {
            name: "Run".to_string(),
            locations: vec!["a.go:3".to_string(), "b.go:7".to_string()],
        };
        assert_eq!(error.kind(), ErrorKind::Ambiguous);
        assert_eq!(
            error.to_string(),
            "function 'Run' is declared more than once (at a.go:3, b.go:7)"
        );
    }
}
