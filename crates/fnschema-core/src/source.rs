//! Syntax model of an analyzed package.
//!
//! A front end turns each source file into a [`SourceUnit`] holding its
//! top-level declarations in source order. Only the pieces the schema
//! translator needs are modeled: function signatures, type declarations,
//! field lists, struct tags and comments.

use std::fmt;

/// One analyzed compilation unit (a single source file).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceUnit {
    /// File name (or any stable label) of the unit.
    pub path: String,
    /// Top-level declarations in source order.
    pub decls: Vec<Decl>,
}

impl SourceUnit {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            decls: Vec::new(),
        }
    }

    /// Top-level function declarations in source order.
    pub fn functions(&self) -> impl Iterator<Item = &FuncDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Func(func) => Some(func),
            Decl::Type(_) => None,
        })
    }

    /// Type declarations in source order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Type(ty) => Some(ty),
            Decl::Func(_) => None,
        })
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Func(FuncDecl),
    Type(TypeDecl),
}

/// A top-level function declaration (methods are not modeled).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    /// Documentation block directly above the declaration.
    pub doc: CommentBlock,
    /// Names of the function's type parameters, if generic.
    pub type_params: Vec<String>,
    /// Parameter declarations in order, one entry per declaration group.
    pub params: Vec<FieldDecl>,
    /// 1-based line of the `func` keyword.
    pub line: usize,
}

/// A named type declaration: `type Name T` or `type Name = T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub type_params: Vec<String>,
    pub ty: TypeExpr,
}

/// A parameter or struct field declaration.
///
/// A grouped declaration such as `a, b int` is a single `FieldDecl` with
/// two names. Embedded struct fields carry their type name as the only name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub names: Vec<String>,
    pub ty: TypeExpr,
    /// Raw tag literal as written in source, including its quotes.
    pub tag: Option<String>,
    pub comments: CommentBlock,
    /// `true` for a trailing `...T` parameter.
    pub variadic: bool,
}

impl FieldDecl {
    #[must_use]
    pub fn new(names: &[&str], ty: TypeExpr) -> Self {
        Self {
            names: names.iter().map(ToString::to_string).collect(),
            ty,
            tag: None,
            comments: CommentBlock::default(),
            variadic: false,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn with_comments(mut self, comments: CommentBlock) -> Self {
        self.comments = comments;
        self
    }

    #[must_use]
    pub const fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }
}

/// Raw comments attached to a declaration, markers included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBlock {
    /// Comments on the lines directly above the declaration.
    pub leading: Vec<String>,
    /// Comments starting on the line the declaration ends on.
    pub trailing: Vec<String>,
}

impl CommentBlock {
    #[must_use]
    pub fn leading(lines: &[&str]) -> Self {
        Self {
            leading: lines.iter().map(ToString::to_string).collect(),
            trailing: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty()
    }
}

/// A type expression as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `T`, or `T[A, B]` when instantiating a generic type.
    Named { name: String, args: Vec<TypeExpr> },
    /// `pkg.T` from another package.
    Qualified { package: String, name: String },
    Pointer(Box<TypeExpr>),
    Slice(Box<TypeExpr>),
    /// Fixed-length array; the length expression is not modeled.
    Array(Box<TypeExpr>),
    Struct(Vec<FieldDecl>),
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    Chan(Box<TypeExpr>),
    Interface,
    Func,
    /// Anything else, kept as source text.
    Other(String),
}

impl TypeExpr {
    /// A plain, non-generic named type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn pointer(inner: Self) -> Self {
        Self::Pointer(Box::new(inner))
    }

    #[must_use]
    pub fn slice(elem: Self) -> Self {
        Self::Slice(Box::new(elem))
    }

    /// Replace every reference to one of `params` by the matching entry of
    /// `args`. Parameters without a matching argument become `Other`.
    #[must_use]
    pub fn substitute(&self, params: &[String], args: &[Self]) -> Self {
        if params.is_empty() {
            return self.clone();
        }
        match self {
            Self::Named { name, args: own } if own.is_empty() => {
                match params.iter().position(|p| p == name) {
                    Some(idx) => args
                        .get(idx)
                        .cloned()
                        .unwrap_or_else(|| Self::Other(name.clone())),
                    None => self.clone(),
                }
            }
            Self::Named { name, args: own } => Self::Named {
                name: name.clone(),
                args: own.iter().map(|a| a.substitute(params, args)).collect(),
            },
            Self::Pointer(inner) => Self::Pointer(Box::new(inner.substitute(params, args))),
            Self::Slice(inner) => Self::Slice(Box::new(inner.substitute(params, args))),
            Self::Array(inner) => Self::Array(Box::new(inner.substitute(params, args))),
            Self::Chan(inner) => Self::Chan(Box::new(inner.substitute(params, args))),
            Self::Map { key, value } => Self::Map {
                key: Box::new(key.substitute(params, args)),
                value: Box::new(value.substitute(params, args)),
            },
            Self::Struct(fields) => Self::Struct(
                fields
                    .iter()
                    .map(|field| FieldDecl {
                        ty: field.ty.substitute(params, args),
                        ..field.clone()
                    })
                    .collect(),
            ),
            Self::Qualified { .. } | Self::Interface | Self::Func | Self::Other(_) => self.clone(),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, args } if args.is_empty() => f.write_str(name),
            Self::Named { name, args } => {
                let args = args.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{name}[{}]", args.join(", "))
            }
            Self::Qualified { package, name } => write!(f, "{package}.{name}"),
            Self::Pointer(inner) => write!(f, "*{inner}"),
            Self::Slice(inner) => write!(f, "[]{inner}"),
            Self::Array(inner) => write!(f, "[N]{inner}"),
            Self::Struct(_) => f.write_str("struct{...}"),
            Self::Map { key, value } => write!(f, "map[{key}]{value}"),
            Self::Chan(inner) => write!(f, "chan {inner}"),
            Self::Interface => f.write_str("interface{...}"),
            Self::Func => f.write_str("func(...)"),
            Self::Other(text) => f.write_str(text),
        }
    }
}
