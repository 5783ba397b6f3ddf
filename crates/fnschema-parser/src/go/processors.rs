use ast_grep_core::Node;
use fnschema_core::{CommentBlock, FieldDecl, FuncDecl, TypeDecl, TypeExpr};

use super::{comments, types};

// ── function_declaration ──────────────────────────────────────────

pub(super) fn process_function<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<FuncDecl> {
    let name = node.field("name").map(|n| n.text().to_string())?;

    let type_params = node
        .field("type_parameters")
        .map(|list| type_parameter_names(&list))
        .unwrap_or_default();
    let params = node
        .field("parameters")
        .map(|list| parameter_list(&list))
        .unwrap_or_default();

    Some(FuncDecl {
        name,
        doc: CommentBlock {
            leading: comments::leading(node),
            trailing: Vec::new(),
        },
        type_params,
        params,
        line: node.start_pos().line() + 1,
    })
}

/// Parameter declarations of a `parameter_list`, including a trailing
/// variadic declaration.
fn parameter_list<D: ast_grep_core::Doc>(list: &Node<D>) -> Vec<FieldDecl> {
    list.children()
        .filter_map(|child| match child.kind().as_ref() {
            "parameter_declaration" => Some(parameter(&child, false)),
            "variadic_parameter_declaration" => Some(parameter(&child, true)),
            _ => None,
        })
        .collect()
}

fn parameter<D: ast_grep_core::Doc>(node: &Node<D>, variadic: bool) -> FieldDecl {
    let names = node
        .children()
        .filter(|c| c.kind().as_ref() == "identifier")
        .map(|c| c.text().to_string())
        .collect();
    let ty = node.field("type").map_or_else(
        || TypeExpr::Other(node.text().to_string()),
        |ty| types::type_expr(&ty),
    );

    FieldDecl {
        names,
        ty,
        tag: None,
        comments: comments::attached(node),
        variadic,
    }
}

// ── struct fields ─────────────────────────────────────────────────

/// Field declarations of a `field_declaration_list`.
///
/// Handles three cases:
/// - Named fields: `Name, Alias string` (one declaration, two names)
/// - Embedded types: `Config`, named after the type
/// - Embedded pointer types: `*Logger`, named after the pointee
pub(super) fn field_declarations<D: ast_grep_core::Doc>(list: &Node<D>) -> Vec<FieldDecl> {
    list.children()
        .filter(|c| c.kind().as_ref() == "field_declaration")
        .map(|field| field_declaration(&field))
        .collect()
}

fn field_declaration<D: ast_grep_core::Doc>(node: &Node<D>) -> FieldDecl {
    let names: Vec<String> = node
        .children()
        .filter(|c| c.kind().as_ref() == "field_identifier")
        .map(|c| c.text().to_string())
        .collect();
    let tag = node.field("tag").map(|t| t.text().to_string());
    let mut ty = node.field("type").map_or_else(
        || TypeExpr::Other(node.text().to_string()),
        |ty| types::type_expr(&ty),
    );

    let names = if names.is_empty() {
        let name = embedded_name(&ty);
        if node.children().any(|c| c.kind().as_ref() == "*") {
            ty = TypeExpr::pointer(ty);
        }
        vec![name]
    } else {
        names
    };

    FieldDecl {
        names,
        ty,
        tag,
        comments: comments::attached(node),
        variadic: false,
    }
}

/// An embedded field is named after its type, without package or type arguments.
fn embedded_name(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Named { name, .. } | TypeExpr::Qualified { name, .. } => name.clone(),
        other => other.to_string(),
    }
}

// ── type_declaration ──────────────────────────────────────────────

pub(super) fn process_type_declaration<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<TypeDecl> {
    node.children()
        .filter_map(|child| match child.kind().as_ref() {
            "type_spec" | "type_alias" => process_type_spec(&child),
            _ => None,
        })
        .collect()
}

fn process_type_spec<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<TypeDecl> {
    let name = node.field("name").map(|n| n.text().to_string())?;
    let ty = node.field("type").map(|ty| types::type_expr(&ty))?;
    let type_params = node
        .field("type_parameters")
        .map(|list| type_parameter_names(&list))
        .unwrap_or_default();

    Some(TypeDecl {
        name,
        type_params,
        ty,
    })
}

/// Names declared by a `type_parameter_list`: `[K comparable, V any]`.
fn type_parameter_names<D: ast_grep_core::Doc>(list: &Node<D>) -> Vec<String> {
    list.children()
        .filter(|c| c.kind().as_ref() == "type_parameter_declaration")
        .flat_map(|decl| {
            decl.children()
                .filter(|c| c.kind().as_ref() == "identifier")
                .map(|c| c.text().to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}
