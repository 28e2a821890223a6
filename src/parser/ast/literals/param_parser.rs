use crate::parser::{ast::ConstantValue, ParseError, QueryParser};

pub struct ParamParser;

impl ParamParser {
    pub fn is_param(parser: &QueryParser) -> bool {
        parser.current() == '@'
    }

    pub fn is_name_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_'
    }

    /// Text written after `@`; names with other characters are back-quoted.
    pub fn quote_name(name: &str) -> String {
        if !name.is_empty() && name.chars().all(Self::is_name_char) {
            return name.to_string();
        }

        format!("`{}`", name.replace('`', "``"))
    }

    /// Parses a named parameter marker (`@name` or ``@`any name` ``).
    pub fn parse(parser: &mut QueryParser) -> Result<ConstantValue, ParseError> {
        let pivot = parser.position;
        if !ParamParser::is_param(parser) {
            return Err(ParseError::new("Invalid parameter", pivot, parser));
        }
        parser.next();

        if parser.current() == '`' {
            return Self::parse_quoted(parser, pivot);
        }

        let start = parser.position;
        while !parser.eof() && Self::is_name_char(parser.current()) {
            parser.next();
        }

        if start == parser.position {
            return Err(ParseError::new("Invalid parameter name", pivot, parser));
        }

        Ok(ConstantValue::Placeholder(parser.text_from_pivot(start)))
    }

    fn parse_quoted(parser: &mut QueryParser, pivot: usize) -> Result<ConstantValue, ParseError> {
        parser.next();
        let mut name = String::new();

        loop {
            if parser.eof() {
                return Err(ParseError::new("Unterminated parameter name", pivot, parser));
            }
            if parser.current() == '`' {
                if parser.peek(1) == '`' {
                    name.push('`');
                    parser.jump(2);
                    continue;
                }
                parser.next();
                break;
            }
            name.push(parser.current());
            parser.next();
        }

        if name.is_empty() {
            return Err(ParseError::new("Invalid parameter name", pivot, parser));
        }

        Ok(ConstantValue::Placeholder(name))
    }
}
