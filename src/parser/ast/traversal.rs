use crate::parser::ast::Node;

/// Called once per node by [`walk`], parents before children.
pub trait Visitor {
    fn visit(&mut self, node: &Node);
}

/// Mutable counterpart of [`Visitor`], driven by [`walk_mut`].
pub trait VisitorMut {
    fn visit_mut(&mut self, node: &mut Node);
}

/// Pre-order, left-to-right walk over every node of the tree.
///
/// `Select` children come in this order: from table, targets, common table
/// expressions, where, group by, having, order by. `LIMIT` and `OFFSET`
/// are not visited.
pub fn walk<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) {
    visitor.visit(node);
    for child in traversal_children(node) {
        walk(child, visitor);
    }
}

pub fn walk_mut<V: VisitorMut + ?Sized>(node: &mut Node, visitor: &mut V) {
    visitor.visit_mut(node);
    for child in traversal_children_mut(node) {
        walk_mut(child, visitor);
    }
}

fn traversal_children(node: &Node) -> Vec<&Node> {
    match node {
        Node::Select(select) => {
            let mut children: Vec<&Node> = vec![];
            children.extend(select.from_table.iter());
            children.extend(select.targets.iter());
            children.extend(select.cte.iter().map(|cte| &cte.query));
            children.extend(select.where_clause.iter());
            children.extend(select.group_by.iter());
            children.extend(select.having.iter());
            children.extend(select.order_by.iter().map(|order_by| &order_by.field));
            children
        },
        Node::Join(join) => {
            let mut children: Vec<&Node> = vec![&join.left, &join.right];
            children.extend(join.condition.iter());
            children
        },
        Node::BinaryOperation(operation) => vec![&*operation.left, &*operation.right],
        Node::UnaryOperation(operation) => vec![&*operation.arg],
        Node::BetweenOperation(operation) => vec![&*operation.expr, &*operation.low, &*operation.high],
        Node::Function(function) => function.args.iter().collect(),
        Node::Tuple(items) => items.iter().collect(),
        Node::Identifier(_) | Node::Constant(_) | Node::Star => vec![],
    }
}

fn traversal_children_mut(node: &mut Node) -> Vec<&mut Node> {
    match node {
        Node::Select(select) => {
            let select = select.as_mut();
            let mut children: Vec<&mut Node> = vec![];
            children.extend(select.from_table.iter_mut());
            children.extend(select.targets.iter_mut());
            children.extend(select.cte.iter_mut().map(|cte| &mut cte.query));
            children.extend(select.where_clause.iter_mut());
            children.extend(select.group_by.iter_mut());
            children.extend(select.having.iter_mut());
            children.extend(select.order_by.iter_mut().map(|order_by| &mut order_by.field));
            children
        },
        Node::Join(join) => {
            let join = join.as_mut();
            let mut children: Vec<&mut Node> = vec![&mut join.left, &mut join.right];
            children.extend(join.condition.iter_mut());
            children
        },
        Node::BinaryOperation(operation) => vec![operation.left.as_mut(), operation.right.as_mut()],
        Node::UnaryOperation(operation) => vec![operation.arg.as_mut()],
        Node::BetweenOperation(operation) => {
            vec![operation.expr.as_mut(), operation.low.as_mut(), operation.high.as_mut()]
        },
        Node::Function(function) => function.args.iter_mut().collect(),
        Node::Tuple(items) => items.iter_mut().collect(),
        Node::Identifier(_) | Node::Constant(_) | Node::Star => vec![],
    }
}
