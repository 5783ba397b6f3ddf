//! Translation policies.

use fnschema_core::{CyclePolicy, DuplicatePolicy, TranslateOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchemaConfig {
    /// `"null"` degrades recursive struct references, `"error"` rejects them.
    #[serde(default)]
    pub cycles: CyclePolicy,

    /// `"first"` takes the first of several same-named functions, `"error"`
    /// rejects the lookup.
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

impl SchemaConfig {
    #[must_use]
    pub const fn translate_options(&self) -> TranslateOptions {
        TranslateOptions {
            cycles: self.cycles,
            duplicates: self.duplicates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_translator_defaults() {
        assert_eq!(
            SchemaConfig::default().translate_options(),
            TranslateOptions::default()
        );
    }
}
