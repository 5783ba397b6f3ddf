//! # fnschema-core
//!
//! Core types shared across all fnschema crates.
//!
//! This crate provides:
//! - The source syntax model produced by a source-analysis front end
//!   (function declarations, type declarations, fields, comments)
//! - The `TypeOracle` contract the translator resolves types through
//! - The schema model emitted for function-calling APIs
//!   (`FunctionDetails`, `Definition`, `DataType`)
//! - Translation policies and the error taxonomy

pub mod errors;
pub mod options;
pub mod oracle;
pub mod schema;
pub mod source;

pub use errors::{ErrorKind, SchemaError};
pub use options::{CyclePolicy, DuplicatePolicy, TranslateOptions};
pub use oracle::{BasicKind, ResolvedType, TypeOracle};
pub use schema::{DataType, Definition, FunctionDetails};
pub use source::{CommentBlock, Decl, FieldDecl, FuncDecl, SourceUnit, TypeDecl, TypeExpr};
