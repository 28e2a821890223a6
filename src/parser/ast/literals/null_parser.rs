use crate::parser::{ast::ConstantValue, ParseError, QueryParser};

pub struct NullParser;

impl NullParser {
    pub fn is_null(parser: &QueryParser) -> bool {
        parser.is_next(|c| &c.null)
    }

    pub fn parse(parser: &mut QueryParser) -> Result<ConstantValue, ParseError> {
        if parser.consume(|c| &c.null) {
            return Ok(ConstantValue::Null);
        }

        Err(ParseError::new("Invalid null value", parser.position, parser))
    }
}
