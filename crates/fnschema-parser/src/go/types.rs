use ast_grep_core::Node;
use fnschema_core::TypeExpr;

use super::processors;

const TYPE_KINDS: &[&str] = &[
    "type_identifier",
    "qualified_type",
    "generic_type",
    "pointer_type",
    "slice_type",
    "array_type",
    "implicit_length_array_type",
    "struct_type",
    "map_type",
    "channel_type",
    "interface_type",
    "function_type",
    "parenthesized_type",
    "negated_type",
    "type_elem",
    "type_constraint",
];

/// Convert a type node into a [`TypeExpr`].
pub(super) fn type_expr<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeExpr {
    let other = || TypeExpr::Other(node.text().to_string());
    match node.kind().as_ref() {
        "type_identifier" => TypeExpr::named(node.text()),
        "qualified_type" => match (node.field("package"), node.field("name")) {
            (Some(package), Some(name)) => TypeExpr::Qualified {
                package: package.text().to_string(),
                name: name.text().to_string(),
            },
            _ => other(),
        },
        "generic_type" => {
            let args = node
                .field("type_arguments")
                .map(|list| type_arguments(&list))
                .unwrap_or_default();
            match node.field("type").map(|base| type_expr(&base)) {
                Some(TypeExpr::Named { name, .. }) => TypeExpr::Named { name, args },
                Some(qualified @ TypeExpr::Qualified { .. }) => qualified,
                _ => other(),
            }
        }
        "pointer_type" => first_type_child(node)
            .map_or_else(other, |inner| TypeExpr::pointer(type_expr(&inner))),
        "slice_type" => node
            .field("element")
            .map_or_else(other, |elem| TypeExpr::slice(type_expr(&elem))),
        "array_type" | "implicit_length_array_type" => node
            .field("element")
            .map_or_else(other, |elem| TypeExpr::Array(Box::new(type_expr(&elem)))),
        "struct_type" => node
            .children()
            .find(|c| c.kind().as_ref() == "field_declaration_list")
            .map_or_else(
                || TypeExpr::Struct(Vec::new()),
                |list| TypeExpr::Struct(processors::field_declarations(&list)),
            ),
        "map_type" => match (node.field("key"), node.field("value")) {
            (Some(key), Some(value)) => TypeExpr::Map {
                key: Box::new(type_expr(&key)),
                value: Box::new(type_expr(&value)),
            },
            _ => other(),
        },
        "channel_type" => node
            .field("value")
            .map_or_else(other, |value| TypeExpr::Chan(Box::new(type_expr(&value)))),
        "interface_type" => TypeExpr::Interface,
        "function_type" => TypeExpr::Func,
        "parenthesized_type" | "type_elem" | "type_constraint" => {
            first_type_child(node).map_or_else(other, |inner| type_expr(&inner))
        }
        _ => other(),
    }
}

/// Type arguments of a generic instantiation: `[int, string]`.
fn type_arguments<D: ast_grep_core::Doc>(list: &Node<D>) -> Vec<TypeExpr> {
    list.children()
        .filter(|c| is_type_kind(c.kind().as_ref()))
        .map(|c| type_expr(&c))
        .collect()
}

fn first_type_child<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    node.children().find(|c| is_type_kind(c.kind().as_ref()))
}

fn is_type_kind(kind: &str) -> bool {
    TYPE_KINDS.contains(&kind)
}
