//! Static type resolution over an analyzed package.
//!
//! Resolution follows package-level named types (defined types and
//! aliases) until it reaches a structural type. Package scope shadows the
//! predeclared identifiers, as in Go.

use fnschema_core::{BasicKind, ResolvedType, SchemaError, SourceUnit, TypeExpr, TypeOracle};

use crate::package::SourcePackage;

impl TypeOracle for SourcePackage {
    fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    fn resolve(&self, expr: &TypeExpr, type_params: &[String]) -> Result<ResolvedType, SchemaError> {
        let mut current = expr.clone();
        let mut scope = type_params;
        let mut followed: Vec<String> = Vec::new();

        loop {
            let resolved = match current {
                TypeExpr::Named { name, args } => {
                    if args.is_empty() && scope.contains(&name) {
                        ResolvedType::Unsupported(format!("type parameter {name}"))
                    } else if followed.contains(&name) {
                        ResolvedType::Unsupported(format!("invalid recursive type {name}"))
                    } else if let Some(decl) = self.type_decl(&name) {
                        // Arguments are written in the caller's scope; the body is not.
                        let args: Vec<TypeExpr> =
                            args.iter().map(|arg| arg.substitute(scope, &[])).collect();
                        current = decl.ty.substitute(&decl.type_params, &args);
                        followed.push(name);
                        scope = &[];
                        continue;
                    } else {
                        return predeclared(&name).ok_or(SchemaError::UnresolvedType(name));
                    }
                }
                TypeExpr::Qualified { package, name } => {
                    ResolvedType::Unsupported(format!("external type {package}.{name}"))
                }
                TypeExpr::Pointer(inner) => ResolvedType::Pointer(*inner),
                TypeExpr::Slice(elem) | TypeExpr::Array(elem) => ResolvedType::Sequence(*elem),
                TypeExpr::Struct(fields) => ResolvedType::Struct(fields),
                TypeExpr::Map { .. } => ResolvedType::Unsupported("map".to_string()),
                TypeExpr::Chan(_) => ResolvedType::Unsupported("channel".to_string()),
                TypeExpr::Interface => ResolvedType::Unsupported("interface".to_string()),
                TypeExpr::Func => ResolvedType::Unsupported("function".to_string()),
                TypeExpr::Other(text) => ResolvedType::Unsupported(text),
            };
            return Ok(resolved);
        }
    }
}

/// Universe-scope type identifiers.
fn predeclared(name: &str) -> Option<ResolvedType> {
    let kind = match name {
        "bool" => BasicKind::Bool,
        "int" => BasicKind::Int,
        "int8" => BasicKind::Int8,
        "int16" => BasicKind::Int16,
        "int32" | "rune" => BasicKind::Int32,
        "int64" => BasicKind::Int64,
        "uint" => BasicKind::Uint,
        "uint8" | "byte" => BasicKind::Uint8,
        "uint16" => BasicKind::Uint16,
        "uint32" => BasicKind::Uint32,
        "uint64" => BasicKind::Uint64,
        "uintptr" => BasicKind::Uintptr,
        "float32" => BasicKind::Float32,
        "float64" => BasicKind::Float64,
        "complex64" => BasicKind::Complex64,
        "complex128" => BasicKind::Complex128,
        "string" => BasicKind::String,
        "error" | "any" | "comparable" => {
            return Some(ResolvedType::Unsupported(format!("interface {name}")));
        }
        _ => return None,
    };
    Some(ResolvedType::Basic(kind))
}
