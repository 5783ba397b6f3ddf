//! Top-level function lookup across analyzed units.

use fnschema_core::{DuplicatePolicy, FuncDecl, SchemaError, SourceUnit};

/// Find the top-level function named exactly `name`.
///
/// Units are scanned in order, then declarations within a unit. With
/// [`DuplicatePolicy::First`] the first match wins; with
/// [`DuplicatePolicy::Error`] a name declared more than once is rejected.
///
/// # Errors
/// Returns `SchemaError::FunctionNotFound` when no unit declares the name,
/// and `SchemaError::AmbiguousFunction` for a rejected duplicate.
pub fn find_function<'a>(
    units: &'a [SourceUnit],
    name: &str,
    policy: DuplicatePolicy,
) -> Result<&'a FuncDecl, SchemaError> {
    let mut matches = units.iter().flat_map(|unit| {
        unit.functions()
            .filter(move |func| func.name == name)
            .map(move |func| (unit.path.as_str(), func))
    });

    let Some((path, first)) = matches.next() else {
        return Err(SchemaError::FunctionNotFound(name.to_string()));
    };
    let shadowed: Vec<String> = matches
        .map(|(path, func)| format!("{path}:{}", func.line))
        .collect();
    if shadowed.is_empty() {
        return Ok(first);
    }

    match policy {
        DuplicatePolicy::First => {
            tracing::debug!(
                function = name,
                file = path,
                line = first.line,
                ?shadowed,
                "using first declaration"
            );
            Ok(first)
        }
        DuplicatePolicy::Error => {
            let mut locations = vec![format!("{path}:{}", first.line)];
            locations.extend(shadowed);
            Err(SchemaError::AmbiguousFunction {
                name: name.to_string(),
                locations,
            })
        }
    }
}
