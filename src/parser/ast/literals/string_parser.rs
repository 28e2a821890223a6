use crate::parser::{ast::ConstantValue, ParseError, QueryParser};

pub struct StringParser;

impl StringParser {
    pub fn is_string_delimiter(parser: &QueryParser) -> bool {
        parser.current() == '\'' || parser.current() == '"'
    }

    /// Parses a quoted string; a doubled delimiter inside the string stands
    /// for one literal delimiter.
    pub fn parse(parser: &mut QueryParser) -> Result<ConstantValue, ParseError> {
        let pivot = parser.position;

        if !StringParser::is_string_delimiter(parser) {
            return Err(ParseError::new("Invalid string value", pivot, parser));
        }
        let delimiter = parser.current();
        parser.next();

        let mut text = String::new();
        loop {
            if parser.eof() {
                return Err(ParseError::new("Unterminated string", pivot, parser));
            }

            let current = parser.current();
            if current == delimiter {
                if parser.peek(1) == delimiter {
                    text.push(delimiter);
                    parser.jump(2);
                    continue;
                }
                parser.next();
                break;
            }

            text.push(current);
            parser.next();
        }

        Ok(ConstantValue::String(text))
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{ast::{ConstantValue, StringParser}, QueryParser};

    #[test]
    pub fn test_string_parser() {
        let text = "'identifier'";

        let mut parser = QueryParser::new(text);

        let result = StringParser::parse(&mut parser);

        match result {
            Ok(result) => match result {
                ConstantValue::String(result) => assert_eq!(result, "identifier"),
                _ => panic!(),
            },
            Err(_) => panic!(),
        }
        assert!(parser.eof());
    }

    #[test]
    pub fn test_string_parser_double_quotes() {
        let text = "\"start\tend\"";

        let mut parser = QueryParser::new(text);

        let result = StringParser::parse(&mut parser).expect("Failed to parse string");

        assert_eq!(result, ConstantValue::String("start\tend".into()));
    }

    #[test]
    pub fn test_string_parser_escaped_delimiter() {
        let text = "'it''s' rest";

        let mut parser = QueryParser::new(text);

        let result = StringParser::parse(&mut parser).expect("Failed to parse string");

        assert_eq!(result, ConstantValue::String("it's".into()));
        assert_eq!(parser.current(), ' ');
    }

    #[test]
    pub fn test_string_parser_other_delimiter_inside() {
        let text = "'say \"hi\"'";

        let mut parser = QueryParser::new(text);

        let result = StringParser::parse(&mut parser).expect("Failed to parse string");

        assert_eq!(result, ConstantValue::String("say \"hi\"".into()));
    }

    #[test]
    pub fn test_string_parser_unterminated() {
        let text = "'open";

        let mut parser = QueryParser::new(text);

        let result = StringParser::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.message, "Unterminated string");
                assert_eq!(err.start, 0);
                assert_eq!(err.end, 5);
            },
        }
    }
}
