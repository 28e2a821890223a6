use std::fmt;

use crate::parser::QueryParser;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    Like,
    NotLike,
    In,
    NotIn,
    Is,
    IsNot,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "<>",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::Like => "LIKE",
            BinaryOp::NotLike => "NOT LIKE",
            BinaryOp::In => "IN",
            BinaryOp::NotIn => "NOT IN",
            BinaryOp::Is => "IS",
            BinaryOp::IsNot => "IS NOT",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        };
        write!(f, "{}", text)
    }
}

impl fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryOp({})", self)
    }
}

impl BinaryOp {
    /// Consumes a comparison operator under the cursor.
    pub fn check_comparator(parser: &mut QueryParser) -> Option<BinaryOp> {
        // two-char operators first, `<` would shadow `<=` and `<>`
        if parser.consume(|c| &c.less_than_or_equal) {
            return Some(BinaryOp::LtEq);
        }

        if parser.consume(|c| &c.greater_than_or_equal) {
            return Some(BinaryOp::GtEq);
        }

        if parser.consume(|c| &c.not_equal_b) || parser.consume(|c| &c.not_equal_c) {
            return Some(BinaryOp::NotEq);
        }

        if parser.consume(|c| &c.equal) {
            return Some(BinaryOp::Eq);
        }

        if parser.consume(|c| &c.less_than) {
            return Some(BinaryOp::Lt);
        }

        if parser.consume(|c| &c.greater_than) {
            return Some(BinaryOp::Gt);
        }

        None
    }

    pub fn check_additive(parser: &mut QueryParser) -> Option<BinaryOp> {
        let op = match parser.current() {
            '+' => BinaryOp::Add,
            '-' => BinaryOp::Sub,
            _ => return None,
        };
        parser.next();
        parser.next_non_whitespace();
        Some(op)
    }

    pub fn check_multiplicative(parser: &mut QueryParser) -> Option<BinaryOp> {
        let op = match parser.current() {
            '*' => BinaryOp::Mul,
            '/' => BinaryOp::Div,
            '%' => BinaryOp::Mod,
            _ => return None,
        };
        parser.next();
        parser.next_non_whitespace();
        Some(op)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::Not => write!(f, "NOT "),
        }
    }
}

impl fmt::Debug for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Neg => write!(f, "UnaryOp(-)"),
            UnaryOp::Not => write!(f, "UnaryOp(NOT)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::BinaryOp, QueryParser};

    #[test]
    pub fn test_comparators() {
        let cases = [
            ("= 1", BinaryOp::Eq),
            ("<> 1", BinaryOp::NotEq),
            ("!= 1", BinaryOp::NotEq),
            ("< 1", BinaryOp::Lt),
            ("<=1", BinaryOp::LtEq),
            ("> 1", BinaryOp::Gt),
            (">=1", BinaryOp::GtEq),
        ];

        for (text, expected) in cases {
            let mut parser = QueryParser::new(text);

            assert_eq!(BinaryOp::check_comparator(&mut parser), Some(expected), "{}", text);
            assert_eq!(parser.current(), '1');
        }
    }

    #[test]
    pub fn test_not_a_comparator() {
        let mut parser = QueryParser::new("AND b");

        assert_eq!(BinaryOp::check_comparator(&mut parser), None);
        assert_eq!(parser.position, 0);
    }
}
