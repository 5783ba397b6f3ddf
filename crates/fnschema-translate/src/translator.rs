//! Recursive type-to-schema translation.

use fnschema_core::{
    BasicKind, CyclePolicy, DataType, Definition, FieldDecl, FuncDecl, FunctionDetails,
    ResolvedType, SchemaError, TranslateOptions, TypeExpr, TypeOracle,
};

use crate::comments::describe;
use crate::tags::{FieldTags, parse_field_tags};

pub(crate) struct Translator<'a, O: ?Sized> {
    oracle: &'a O,
    options: TranslateOptions,
    /// Named types whose expansion is in progress on the current path.
    expanding: Vec<String>,
}

impl<'a, O: TypeOracle + ?Sized> Translator<'a, O> {
    pub(crate) const fn new(oracle: &'a O, options: TranslateOptions) -> Self {
        Self {
            oracle,
            options,
            expanding: Vec::new(),
        }
    }

    pub(crate) fn function(&mut self, func: &FuncDecl) -> Result<FunctionDetails, SchemaError> {
        Ok(FunctionDetails {
            name: func.name.clone(),
            description: describe(&func.doc),
            parameters: self.parameters(func)?,
        })
    }

    /// Every parameter is required. A lone parameter replaces the wrapping
    /// object with its own schema.
    fn parameters(&mut self, func: &FuncDecl) -> Result<Definition, SchemaError> {
        let mut object = Definition::object();
        let mut position = 0;
        for param in &func.params {
            let names = parameter_names(param, &mut position);
            let Some(label) = names.first() else {
                continue;
            };
            let (definition, _) = self
                .field(param, label, &func.type_params)
                .map_err(|source| SchemaError::Parameter {
                    parameter: label.clone(),
                    source: Box::new(source),
                })?;
            for name in names {
                object.insert_property(name, definition.clone(), true);
            }
        }
        Ok(object.into_single_property().unwrap_or_else(|object| object))
    }

    /// Schema of one parameter or struct field, plus whether it is required.
    fn field(
        &mut self,
        field: &FieldDecl,
        label: &str,
        scope: &[String],
    ) -> Result<(Definition, bool), SchemaError> {
        let tags = match &field.tag {
            Some(literal) => parse_field_tags(literal).map_err(|e| SchemaError::TagSyntax {
                field: label.to_string(),
                reason: e.to_string(),
            })?,
            None => FieldTags::default(),
        };

        let mut definition = self.type_definition(&field.ty, scope)?;
        if field.variadic {
            definition = Definition::array(definition);
        }
        let description = describe(&field.comments);
        if !description.is_empty() {
            definition.description = description;
        }
        if let Some(values) = tags.enum_values {
            definition.enum_values = values;
        }
        Ok((definition, tags.required))
    }

    fn type_definition(
        &mut self,
        expr: &TypeExpr,
        scope: &[String],
    ) -> Result<Definition, SchemaError> {
        let identity = matches!(expr, TypeExpr::Named { .. }).then(|| expr.to_string());
        if let Some(identity) = &identity
            && self.expanding.contains(identity)
        {
            return self.recursive_reference(identity);
        }

        // A named type's body is resolved outside the function's type parameters.
        let inner: &[String] = if identity.is_some() { &[] } else { scope };
        match self.oracle.resolve(expr, scope)? {
            ResolvedType::Basic(kind) => Ok(Definition::new(basic_data_type(kind))),
            ResolvedType::Unsupported(what) => {
                tracing::debug!(type_expr = %expr, what = %what, "unsupported type becomes null");
                Ok(Definition::null())
            }
            ResolvedType::Pointer(pointee) => {
                self.expand(identity, |this| this.type_definition(&pointee, inner))
            }
            ResolvedType::Sequence(elem) => self.expand(identity, |this| {
                Ok(Definition::array(this.type_definition(&elem, inner)?))
            }),
            ResolvedType::Struct(fields) => {
                self.expand(identity, |this| this.struct_definition(&fields, inner))
            }
        }
    }

    /// Run `build` with `identity` marked as being expanded.
    fn expand(
        &mut self,
        identity: Option<String>,
        build: impl FnOnce(&mut Self) -> Result<Definition, SchemaError>,
    ) -> Result<Definition, SchemaError> {
        let marked = identity.is_some();
        self.expanding.extend(identity);
        let result = build(self);
        if marked {
            self.expanding.pop();
        }
        result
    }

    /// Fields become properties in declaration order; blank `_` fields are
    /// skipped.
    fn struct_definition(
        &mut self,
        fields: &[FieldDecl],
        scope: &[String],
    ) -> Result<Definition, SchemaError> {
        let mut object = Definition::object();
        for field in fields {
            let names: Vec<&String> = field.names.iter().filter(|n| *n != "_").collect();
            let Some(label) = names.first() else {
                continue;
            };
            let (definition, required) = self.field(field, label, scope)?;
            for name in names {
                object.insert_property(name.clone(), definition.clone(), required);
            }
        }
        Ok(object)
    }

    fn recursive_reference(&self, identity: &str) -> Result<Definition, SchemaError> {
        match self.options.cycles {
            CyclePolicy::Error => Err(SchemaError::RecursiveType(identity.to_string())),
            CyclePolicy::Null => {
                tracing::warn!(type_name = identity, "recursive type reference replaced by null");
                Ok(Definition::null().with_description(format!("recursive reference to {identity}")))
            }
        }
    }
}

/// Declared names of a parameter group. Unnamed and blank parameters are
/// called `arg{N}` after their position in the flattened list.
fn parameter_names(param: &FieldDecl, position: &mut usize) -> Vec<String> {
    let mut positional = |name: Option<&str>| {
        let index = *position;
        *position += 1;
        match name {
            Some(name) if name != "_" => name.to_string(),
            _ => format!("arg{index}"),
        }
    };
    if param.names.is_empty() {
        return vec![positional(None)];
    }
    param.names.iter().map(|n| positional(Some(n.as_str()))).collect()
}

const fn basic_data_type(kind: BasicKind) -> DataType {
    match kind {
        BasicKind::Bool => DataType::Boolean,
        BasicKind::Int
        | BasicKind::Int8
        | BasicKind::Int16
        | BasicKind::Int32
        | BasicKind::Int64
        | BasicKind::Uint
        | BasicKind::Uint8
        | BasicKind::Uint16
        | BasicKind::Uint32
        | BasicKind::Uint64 => DataType::Integer,
        BasicKind::Float32 | BasicKind::Float64 => DataType::Number,
        BasicKind::String => DataType::String,
        BasicKind::Uintptr | BasicKind::Complex64 | BasicKind::Complex128 => DataType::Null,
    }
}
