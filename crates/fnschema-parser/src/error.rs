//! Parser error types for fnschema-parser.

use fnschema_core::SchemaError;

/// Errors raised while loading and parsing a Go package.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no Go source files in {0}")]
    NoSources(String),

    #[error("Parse failed for {file}:{line}: {detail}")]
    Syntax {
        file: String,
        line: usize,
        detail: String,
    },
}

impl From<ParserError> for SchemaError {
    fn from(error: ParserError) -> Self {
        Self::provider(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnschema_core::ErrorKind;

    #[test]
    fn converts_into_provider_failure() {
        let error: SchemaError = ParserError::NoSources("/tmp/pkg".to_string()).into();
        assert_eq!(error.kind(), ErrorKind::Provider);
        assert_eq!(
            error.to_string(),
            "source analysis failed: no Go source files in /tmp/pkg"
        );
    }
}
