use std::fmt;

use crate::parser::{ast::{ExpressionParser, Identifier, Node, Select}, ParseError, QueryParser};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoinType {
    /// `a, b`
    Implicit,
    Inner,
    Left,
    Right,
    Full,
    Cross,
    Plain,
}

impl JoinType {
    /// Consumes a join keyword sequence, returning `None` when the cursor is
    /// not on one.
    pub fn check(parser: &mut QueryParser) -> Result<Option<JoinType>, ParseError> {
        if parser.current() == ',' {
            parser.next();
            parser.next_non_whitespace();
            return Ok(Some(JoinType::Implicit));
        }

        let join_type = if parser.consume(|c| &c.inner) {
            JoinType::Inner
        } else if parser.consume(|c| &c.left) {
            parser.consume(|c| &c.outer);
            JoinType::Left
        } else if parser.consume(|c| &c.right) {
            parser.consume(|c| &c.outer);
            JoinType::Right
        } else if parser.consume(|c| &c.full) {
            parser.consume(|c| &c.outer);
            JoinType::Full
        } else if parser.consume(|c| &c.cross) {
            JoinType::Cross
        } else if parser.is_next(|c| &c.join) {
            JoinType::Plain
        } else {
            return Ok(None);
        };

        parser.expect(|c| &c.join, "Invalid join statement")?;
        Ok(Some(join_type))
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            JoinType::Implicit => ",",
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
            JoinType::Full => "FULL JOIN",
            JoinType::Cross => "CROSS JOIN",
            JoinType::Plain => "JOIN",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub join_type: JoinType,
    pub left: Node,
    pub right: Node,
    pub condition: Option<Node>,
}

impl Join {
    /// Parses the FROM clause: table references chained left-deep by joins.
    pub fn parse_from(parser: &mut QueryParser) -> Result<Node, ParseError> {
        let mut left = Self::parse_table(parser)?;

        while let Some(join_type) = JoinType::check(parser)? {
            let right = Self::parse_table(parser)?;

            let mut condition = None;
            if join_type != JoinType::Implicit && parser.consume(|c| &c.on) {
                condition = Some(ExpressionParser::parse(parser)?);
            }

            left = Node::Join(Box::new(Join { join_type, left, right, condition }));
        }

        Ok(left)
    }

    /// A table name or a parenthesised sub-select, with an optional alias.
    pub fn parse_table(parser: &mut QueryParser) -> Result<Node, ParseError> {
        parser.next_non_whitespace();
        let pivot = parser.position;

        let mut table = if parser.current() == '(' {
            parser.next();
            parser.next_non_whitespace();
            if !parser.is_next(|c| &c.select) && !parser.is_next(|c| &c.with) {
                return ParseError::new("Invalid collection", pivot, parser).err();
            }
            let mut select = Select::parse_statement(parser)?;
            parser.expect_char(')', "Expected ) after sub-select")?;
            select.parentheses = true;
            Node::Select(Box::new(select))
        } else if Identifier::is_start(parser) {
            Node::Identifier(Identifier::parse(parser)?)
        } else {
            return ParseError::new("Invalid collection", pivot, parser).err();
        };

        if let Some(alias) = ExpressionParser::parse_alias(parser)? {
            table.set_alias(alias);
        }

        Ok(table)
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.join_type {
            JoinType::Implicit => write!(f, "{}, {}", self.left, self.right)?,
            join_type => write!(f, "{} {} {}", self.left, join_type, self.right)?,
        }

        if let Some(condition) = &self.condition {
            write!(f, " ON {}", condition)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{Join, JoinType, Node}, QueryParser};

    #[test]
    pub fn test_single_table_with_alias() {
        let text = "db.users AS u WHERE";

        let mut parser = QueryParser::new(text);

        let result = Join::parse_from(&mut parser).expect("Failed to parse table");

        match result {
            Node::Identifier(identifier) => {
                assert_eq!(identifier.parts, vec!["db", "users"]);
                assert_eq!(identifier.alias.as_deref(), Some("u"));
            },
            _ => panic!(),
        }
        assert!(parser.is_next(|c| &c.r#where));
    }

    #[test]
    pub fn test_inner_join() {
        let text = "tableA a INNER JOIN tableB b ON a.id = b.id";

        let mut parser = QueryParser::new(text);

        let result = Join::parse_from(&mut parser).expect("Failed to parse join");

        match result {
            Node::Join(join) => {
                assert_eq!(join.join_type, JoinType::Inner);
                assert!(join.condition.is_some());
                assert_eq!(join.to_string(), "tableA AS a INNER JOIN tableB AS b ON a.id = b.id");
            },
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_left_outer_join_chain() {
        let text = "a LEFT OUTER JOIN b ON a.id = b.id JOIN c ON c.id = b.id";

        let mut parser = QueryParser::new(text);

        let result = Join::parse_from(&mut parser).expect("Failed to parse join");

        match result {
            Node::Join(join) => {
                assert_eq!(join.join_type, JoinType::Plain);
                match &join.left {
                    Node::Join(inner) => assert_eq!(inner.join_type, JoinType::Left),
                    _ => panic!(),
                }
            },
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_implicit_join() {
        let text = "a, b";

        let mut parser = QueryParser::new(text);

        let result = Join::parse_from(&mut parser).expect("Failed to parse join");

        assert_eq!(result.to_string(), "a, b");
    }

    #[test]
    pub fn test_sub_select() {
        let text = "(SELECT id FROM t) AS q";

        let mut parser = QueryParser::new(text);

        let result = Join::parse_from(&mut parser).expect("Failed to parse sub-select");

        assert_eq!(result.to_string(), "(SELECT id FROM t) AS q");
    }

    #[test]
    pub fn test_join_without_join_keyword() {
        let text = "a LEFT b";

        let mut parser = QueryParser::new(text);

        let result = Join::parse_from(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.message, "Invalid join statement");
                assert_eq!(err.start, 7);
            },
        }
    }

    #[test]
    pub fn test_invalid_collection() {
        let text = "123";

        let mut parser = QueryParser::new(text);

        let result = Join::parse_from(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.message, "Invalid collection");
                assert_eq!(err.text, "1");
            },
        }
    }
}
