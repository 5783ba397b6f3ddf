//! Which files of a Go package are analyzed.

use fnschema_parser::LoadOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Also analyze `_test.go` files.
    #[serde(default)]
    pub include_tests: bool,
}

impl SourceConfig {
    #[must_use]
    pub const fn load_options(&self) -> LoadOptions {
        LoadOptions {
            include_tests: self.include_tests,
        }
    }
}
