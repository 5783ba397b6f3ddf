//! # fnschema-parser
//!
//! ast-grep-based Go source analysis for fnschema.
//!
//! Loads every `.go` file of a package directory, extracts top-level
//! function and type declarations into the `fnschema-core` source model,
//! and answers static type queries through [`fnschema_core::TypeOracle`]:
//! named types are followed to their underlying structure, predeclared
//! identifiers map to basic kinds, and types from other packages or type
//! parameters resolve to unsupported shapes.

pub mod error;
mod go;
pub mod package;
pub mod parser;
mod resolver;

pub use error::ParserError;
pub use package::{LoadOptions, SourcePackage};
