use ordered_float::NotNan;

use crate::parser::{ast::ConstantValue, ParseError, QueryParser};

pub struct NumberParser;

impl NumberParser {
    pub fn is_number(parser: &QueryParser) -> bool {
        let current = parser.current();
        current.is_ascii_digit() || (current == '.' && parser.peek(1).is_ascii_digit())
    }

    pub fn parse(parser: &mut QueryParser) -> Result<ConstantValue, ParseError> {
        Self::parse_signed(parser, false)
    }

    /// Parses the digits at the cursor; `negative` is a minus sign already
    /// consumed in front of them.
    pub fn parse_signed(parser: &mut QueryParser, negative: bool) -> Result<ConstantValue, ParseError> {
        let pivot = parser.position;
        let mut is_float = false;

        if !NumberParser::is_number(parser) {
            return Err(ParseError::new("Invalid number value", pivot, parser));
        }

        while !parser.eof() && (parser.current().is_ascii_digit() || parser.current() == '.') {
            if parser.current() == '.' {
                if is_float {
                    return Err(ParseError::new("Invalid number value", pivot, parser));
                }
                is_float = true;
            }
            parser.next();
        }

        if parser.current().is_ascii_alphabetic() || parser.current() == '_' {
            return Err(ParseError::new("Invalid number value", pivot, parser));
        }

        let digits = parser.text_from_pivot(pivot);
        let number = match negative {
            true => format!("-{}", digits),
            false => digits,
        };
        let number = match is_float {
            true => {
                let value = number.parse::<f64>().map_err(|_| ParseError::new("Invalid number", pivot, parser))?;
                ConstantValue::Float(NotNan::new(value).map_err(|_| ParseError::new("Invalid number", pivot, parser))?)
            },
            false => ConstantValue::Int(number.parse::<i64>().map_err(|_| ParseError::new("Invalid number", pivot, parser))?),
        };

        Ok(number)
    }
}
