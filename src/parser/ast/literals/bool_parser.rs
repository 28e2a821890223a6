use crate::parser::{ast::ConstantValue, ParseError, QueryParser};

pub struct BoolParser;

impl BoolParser {
    pub fn is_bool(parser: &QueryParser) -> bool {
        parser.is_next(|c| &c.b_true) || parser.is_next(|c| &c.b_false)
    }

    pub fn parse(parser: &mut QueryParser) -> Result<ConstantValue, ParseError> {
        if parser.consume(|c| &c.b_true) {
            return Ok(ConstantValue::Bool(true));
        }

        if parser.consume(|c| &c.b_false) {
            return Ok(ConstantValue::Bool(false));
        }

        Err(ParseError::new("Invalid boolean value", parser.position, parser))
    }
}
