//! Translation policies.

use serde::{Deserialize, Serialize};

/// What to do when a struct type is reached again while it is still being
/// expanded (a self-referential or mutually recursive type).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Emit a `null` leaf describing the recursive reference.
    #[default]
    Null,
    /// Abort the translation with `SchemaError::RecursiveType`.
    Error,
}

/// What to do when several units declare a function with the requested name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Take the first declaration in unit order, then declaration order.
    #[default]
    #[serde(alias = "first_match")]
    First,
    /// Abort the lookup with `SchemaError::AmbiguousFunction`.
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    pub cycles: CyclePolicy,
    pub duplicates: DuplicatePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_degrade_and_take_first_match() {
        let options = TranslateOptions::default();
        assert_eq!(options.cycles, CyclePolicy::Null);
        assert_eq!(options.duplicates, DuplicatePolicy::First);
    }

    #[test]
    fn policies_deserialize_from_snake_case() {
        let cycles: CyclePolicy = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(cycles, CyclePolicy::Error);
        let duplicates: DuplicatePolicy = serde_json::from_str("\"first_match\"").unwrap();
        assert_eq!(duplicates, DuplicatePolicy::First);
    }
}
