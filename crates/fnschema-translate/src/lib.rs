//! # fnschema-translate
//!
//! Translates one Go function into a [`FunctionDetails`] value: its name,
//! its documentation, and a JSON Schema description of its parameters for
//! function-calling APIs.
//!
//! The translator works against any [`TypeOracle`]. [`translate`] and
//! [`translate_with`] pair it with the ast-grep Go front end from
//! `fnschema-parser`.
//!
//! Mapping rules:
//! - booleans, integers, floats and strings become scalar schemas;
//!   `uintptr` and complex numbers become `null` leaves
//! - pointers are erased; slices, arrays and variadic parameters become
//!   `array` schemas
//! - structs become `object` schemas with every field required unless
//!   tagged `required:"false"` (or `no`, `0`)
//! - an `enum:"a,b"` tag supplies the allowed values
//! - maps, channels, interfaces, functions, external and generic types
//!   become `null` leaves
//! - a function with exactly one parameter is described by that
//!   parameter's schema alone

mod comments;
mod locator;
mod tags;
mod translator;

use std::path::Path;

use fnschema_core::{FunctionDetails, SchemaError, TranslateOptions, TypeOracle};
use fnschema_parser::{LoadOptions, SourcePackage};

pub use locator::find_function;
pub use tags::{FieldTags, TagError, parse_field_tags};

use translator::Translator;

/// Translate function `name` declared in the Go package at `dir`, with
/// default loading and translation options.
///
/// # Errors
/// See [`translate_with`].
pub fn translate(dir: impl AsRef<Path>, name: &str) -> Result<FunctionDetails, SchemaError> {
    translate_with(dir, name, &LoadOptions::default(), &TranslateOptions::default())
}

/// Load the Go package at `dir` and translate function `name`.
///
/// # Errors
/// Returns `SchemaError::Provider` when the package cannot be loaded or
/// parsed, and any error of [`translate_function`].
pub fn translate_with(
    dir: impl AsRef<Path>,
    name: &str,
    load: &LoadOptions,
    options: &TranslateOptions,
) -> Result<FunctionDetails, SchemaError> {
    let package = SourcePackage::load(dir, load)?;
    translate_function(&package, name, options)
}

/// Translate function `name` using the declarations and type information
/// of `oracle`.
///
/// # Errors
/// Returns `SchemaError::FunctionNotFound` or
/// `SchemaError::AmbiguousFunction` from the lookup, and
/// `SchemaError::Parameter` wrapping a malformed tag, an unresolvable type
/// or a rejected recursive type in one of the parameters.
pub fn translate_function<O: TypeOracle + ?Sized>(
    oracle: &O,
    name: &str,
    options: &TranslateOptions,
) -> Result<FunctionDetails, SchemaError> {
    let func = find_function(oracle.units(), name, options.duplicates)?;
    tracing::debug!(function = name, params = func.params.len(), "translating function");
    Translator::new(oracle, *options).function(func)
}
