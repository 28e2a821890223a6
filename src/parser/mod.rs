pub mod query_parser;
pub use query_parser::*;

pub mod ast;

pub mod parse_error;
pub use parse_error::*;

pub mod word_comparer;
pub use word_comparer::*;

pub mod query_comparers;
pub use query_comparers::*;

pub mod phase;
pub use phase::*;

use crate::parser::ast::{Node, Select};

/// Parses a complete `[WITH ...] SELECT ...` statement, with an optional
/// trailing `;`, into a tree.
pub fn parse_sql(text: &str) -> Result<Node, ParseError> {
    let mut parser = QueryParser::new(text);
    let select = Select::parse_statement(&mut parser)?;

    parser.next_non_whitespace();
    if parser.current() == ';' {
        parser.next();
        parser.next_non_whitespace();
    }

    if !parser.eof() {
        let pivot = parser.position;
        return ParseError::new("Unexpected text after query", pivot, &parser).err();
    }

    Ok(Node::Select(Box::new(select)))
}
