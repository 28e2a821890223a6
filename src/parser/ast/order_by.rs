use std::fmt;

use crate::parser::{ast::{ExpressionParser, Node}, ParseError, QueryParser};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub field: Node,
    pub direction: Option<SortDirection>,
}

impl OrderBy {
    pub fn parse(parser: &mut QueryParser) -> Result<Vec<OrderBy>, ParseError> {
        let mut order_by = vec![];
        loop {
            let field = ExpressionParser::parse(parser)?;
            parser.next_non_whitespace();

            let direction = if parser.consume(|c| &c.asc) {
                Some(SortDirection::Asc)
            } else if parser.consume(|c| &c.desc) {
                Some(SortDirection::Desc)
            } else {
                None
            };
            order_by.push(OrderBy { field, direction });

            parser.next_non_whitespace();
            if parser.current() != ',' {
                break;
            }
            parser.next();
        }

        Ok(order_by)
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(SortDirection::Asc) => write!(f, "{} ASC", self.field),
            Some(SortDirection::Desc) => write!(f, "{} DESC", self.field),
            None => write!(f, "{}", self.field),
        }
    }
}
