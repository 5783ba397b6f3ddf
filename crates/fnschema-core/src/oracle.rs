//! The type-oracle contract between a source-analysis front end and the
//! schema translator.

use crate::errors::SchemaError;
use crate::source::{FieldDecl, SourceUnit, TypeExpr};

/// Predeclared scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
}

/// The underlying structure of a type expression after named-type
/// indirection has been followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    Basic(BasicKind),
    /// Pointer to the carried pointee expression.
    Pointer(TypeExpr),
    /// Slice or array of the carried element expression.
    Sequence(TypeExpr),
    /// Struct with its fields, type arguments already substituted.
    Struct(Vec<FieldDecl>),
    /// A shape with no schema mapping (map, channel, interface, function,
    /// external or generic type). The string names what was found.
    Unsupported(String),
}

/// Static type information for an analyzed package.
pub trait TypeOracle {
    /// Compilation units in load order.
    fn units(&self) -> &[SourceUnit];

    /// Resolve `expr` to its underlying structure.
    ///
    /// `type_params` lists the type-parameter names in scope at the
    /// expression; references to them cannot be resolved statically.
    ///
    /// # Errors
    /// Returns [`SchemaError::UnresolvedType`] when `expr` names a type
    /// that is declared nowhere.
    fn resolve(&self, expr: &TypeExpr, type_params: &[String]) -> Result<ResolvedType, SchemaError>;
}

impl<T: TypeOracle + ?Sized> TypeOracle for &T {
    fn units(&self) -> &[SourceUnit] {
        (**self).units()
    }

    fn resolve(&self, expr: &TypeExpr, type_params: &[String]) -> Result<ResolvedType, SchemaError> {
        (**self).resolve(expr, type_params)
    }
}
