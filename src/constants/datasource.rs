use crate::{
    constants::ConstantsError,
    parser::ast::{Identifier, Node},
};

/// Children followed when looking for the data source.
///
/// Operations, functions and tuples give back their operands, a `SELECT`
/// only its FROM item (common table expressions are not followed) and a
/// join its two sides.
pub fn children(node: &Node) -> Vec<&Node> {
    match node {
        Node::BinaryOperation(operation) => vec![&*operation.left, &*operation.right],
        Node::UnaryOperation(operation) => vec![&*operation.arg],
        Node::BetweenOperation(operation) => vec![&*operation.expr, &*operation.low, &*operation.high],
        Node::Function(function) => function.args.iter().collect(),
        Node::Tuple(items) => items.iter().collect(),
        Node::Select(select) => select.from_table.iter().collect(),
        Node::Join(join) => vec![&join.left, &join.right],
        Node::Identifier(_) | Node::Constant(_) | Node::Star => vec![],
    }
}

fn deepest_identifier<'a>(node: &'a Node, depth: usize, best: &mut Option<(usize, &'a Identifier)>) {
    if let Node::Identifier(identifier) = node {
        // strict: the first identifier found at a depth keeps it
        if best.is_none_or(|(best_depth, _)| depth > best_depth) {
            *best = Some((depth, identifier));
        }
    }

    for child in children(node) {
        deepest_identifier(child, depth + 1, best);
    }
}

/// Leading part of the deepest identifier reachable from `node`.
///
/// Returns an empty string when that identifier has a single part.
pub fn find_datasource(node: &Node) -> Result<String, ConstantsError> {
    let mut best = None;
    deepest_identifier(node, 0, &mut best);

    match best {
        Some((_, identifier)) if identifier.parts.len() > 1 => Ok(identifier.parts[0].clone()),
        Some(_) => Ok(String::new()),
        None => Err(ConstantsError::NoIdentifierInTree),
    }
}
