use std::fmt;

use crate::parser::ast::{BinaryOp, Constant, Identifier, Join, Select, UnaryOp};

/// A node of the parsed query tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Select(Box<Select>),
    Join(Box<Join>),
    Identifier(Identifier),
    Constant(Constant),
    BinaryOperation(BinaryOperation),
    UnaryOperation(UnaryOperation),
    BetweenOperation(BetweenOperation),
    Function(Function),
    Tuple(Vec<Node>),
    Star,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperation {
    pub op: BinaryOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub parentheses: bool,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperation {
    pub op: UnaryOp,
    pub arg: Box<Node>,
    pub parentheses: bool,
    pub alias: Option<String>,
}

/// `expr [NOT] BETWEEN low AND high`
#[derive(Debug, Clone, PartialEq)]
pub struct BetweenOperation {
    pub expr: Box<Node>,
    pub low: Box<Node>,
    pub high: Box<Node>,
    pub negated: bool,
    pub parentheses: bool,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub args: Vec<Node>,
    pub distinct: bool,
    pub alias: Option<String>,
}

impl Node {
    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Node {
        Node::BinaryOperation(BinaryOperation {
            op,
            left: Box::new(left),
            right: Box::new(right),
            parentheses: false,
            alias: None,
        })
    }

    pub fn unary(op: UnaryOp, arg: Node) -> Node {
        Node::UnaryOperation(UnaryOperation {
            op,
            arg: Box::new(arg),
            parentheses: false,
            alias: None,
        })
    }

    pub fn alias(&self) -> Option<&str> {
        let alias = match self {
            Node::Select(select) => &select.alias,
            Node::Identifier(identifier) => &identifier.alias,
            Node::Constant(constant) => &constant.alias,
            Node::BinaryOperation(operation) => &operation.alias,
            Node::UnaryOperation(operation) => &operation.alias,
            Node::BetweenOperation(operation) => &operation.alias,
            Node::Function(function) => &function.alias,
            Node::Join(_) | Node::Tuple(_) | Node::Star => return None,
        };
        alias.as_deref()
    }

    /// Returns `false` when the node kind cannot carry an alias.
    pub fn set_alias(&mut self, alias: String) -> bool {
        let slot = match self {
            Node::Select(select) => &mut select.alias,
            Node::Identifier(identifier) => &mut identifier.alias,
            Node::Constant(constant) => &mut constant.alias,
            Node::BinaryOperation(operation) => &mut operation.alias,
            Node::UnaryOperation(operation) => &mut operation.alias,
            Node::BetweenOperation(operation) => &mut operation.alias,
            Node::Function(function) => &mut function.alias,
            Node::Join(_) | Node::Tuple(_) | Node::Star => return false,
        };
        *slot = Some(alias);
        true
    }

    /// Marks an expression that was written inside parentheses.
    pub fn set_parentheses(&mut self) {
        match self {
            Node::Select(select) => select.parentheses = true,
            Node::BinaryOperation(operation) => operation.parentheses = true,
            Node::UnaryOperation(operation) => operation.parentheses = true,
            Node::BetweenOperation(operation) => operation.parentheses = true,
            _ => {},
        }
    }
}

fn write_wrapped(f: &mut fmt::Formatter<'_>, parentheses: bool, body: fmt::Arguments<'_>) -> fmt::Result {
    if parentheses {
        write!(f, "({})", body)
    } else {
        write!(f, "{}", body)
    }
}

pub(crate) fn write_list(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for (index, node) in nodes.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", node)?;
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Select(select) => write!(f, "{}", select)?,
            Node::Join(join) => write!(f, "{}", join)?,
            Node::Identifier(identifier) => write!(f, "{}", identifier)?,
            Node::Constant(constant) => write!(f, "{}", constant)?,
            Node::BinaryOperation(operation) => write_wrapped(
                f,
                operation.parentheses,
                format_args!("{} {} {}", operation.left, operation.op, operation.right),
            )?,
            Node::UnaryOperation(operation) => write_wrapped(
                f,
                operation.parentheses,
                format_args!("{}{}", operation.op, operation.arg),
            )?,
            Node::BetweenOperation(operation) => write_wrapped(
                f,
                operation.parentheses,
                format_args!(
                    "{} {}BETWEEN {} AND {}",
                    operation.expr,
                    if operation.negated { "NOT " } else { "" },
                    operation.low,
                    operation.high
                ),
            )?,
            Node::Function(function) => {
                write!(f, "{}(", function.name)?;
                if function.distinct {
                    write!(f, "DISTINCT ")?;
                }
                write_list(f, &function.args)?;
                write!(f, ")")?;
            },
            Node::Tuple(items) => {
                write!(f, "(")?;
                write_list(f, items)?;
                write!(f, ")")?;
            },
            Node::Star => write!(f, "*")?,
        }

        if let Some(alias) = self.alias() {
            write!(f, " AS {}", Identifier::quote_part(alias))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::{BinaryOp, Constant, ConstantValue, Identifier, Node, UnaryOp};

    fn column(name: &str) -> Node {
        Node::Identifier(Identifier::new(&[name]))
    }

    fn int(value: i64) -> Node {
        Node::Constant(Constant::new(ConstantValue::Int(value)))
    }

    #[test]
    pub fn test_render_binary_operation() {
        let node = Node::binary(BinaryOp::Eq, column("x"), int(1));

        assert_eq!(node.to_string(), "x = 1");
    }

    #[test]
    pub fn test_render_parentheses_and_alias() {
        let mut node = Node::binary(BinaryOp::Add, column("a"), int(2));
        node.set_parentheses();
        assert!(node.set_alias("total".into()));

        assert_eq!(node.to_string(), "(a + 2) AS total");
    }

    #[test]
    pub fn test_render_unary_operations() {
        let not = Node::unary(UnaryOp::Not, column("flag"));
        let neg = Node::unary(UnaryOp::Neg, column("amount"));

        assert_eq!(not.to_string(), "NOT flag");
        assert_eq!(neg.to_string(), "-amount");
    }

    #[test]
    pub fn test_star_has_no_alias() {
        let mut node = Node::Star;

        assert!(!node.set_alias("x".into()));
        assert_eq!(node.alias(), None);
    }
}
