use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::parser::{ParseError, QueryComparers, QueryParser};

static PLAIN_PART: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Dotted name such as `db.table.column` or `t.*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub parts: Vec<String>,
    pub alias: Option<String>,
}

impl Identifier {
    pub fn new(parts: &[&str]) -> Self {
        Self {
            parts: parts.iter().map(|part| part.to_string()).collect(),
            alias: None,
        }
    }

    pub fn is_star(&self) -> bool {
        self.parts.last().is_some_and(|part| part == "*")
    }

    /// Canonical text of the name; parts that are not plain words are
    /// back-quoted.
    pub fn get_string(&self) -> String {
        self.parts.iter()
            .map(|part| Self::quote_part(part))
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn quote_part(part: &str) -> String {
        if part == "*" || (PLAIN_PART.is_match(part) && !QueryComparers::is_reserved_word(part)) {
            return part.to_string();
        }

        format!("`{}`", part.replace('`', "``"))
    }

    pub fn is_start(parser: &QueryParser) -> bool {
        let current = parser.current();
        current == '`' || current == '_' || current.is_alphabetic()
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Identifier, ParseError> {
        let pivot = parser.position;
        let mut parts: Vec<String> = vec![];

        loop {
            if parser.current() == '*' && !parts.is_empty() {
                parser.next();
                parts.push("*".to_string());
                break;
            }

            if parts.is_empty() && parser.current() != '`' && QueryComparers::is_current_reserved(parser) {
                return ParseError::new("Unexpected keyword", pivot, parser).err();
            }

            parts.push(Self::parse_part(parser)?);

            if parser.current() != '.' {
                break;
            }
            parser.next();
        }

        Ok(Identifier { parts, alias: None })
    }

    fn parse_part(parser: &mut QueryParser) -> Result<String, ParseError> {
        let pivot = parser.position;

        if parser.current() == '`' {
            parser.next();
            let mut text = String::new();
            loop {
                if parser.eof() {
                    return ParseError::new("Unterminated quoted identifier", pivot, parser).err();
                }
                if parser.current() == '`' {
                    if parser.peek(1) == '`' {
                        text.push('`');
                        parser.jump(2);
                        continue;
                    }
                    parser.next();
                    break;
                }
                text.push(parser.current());
                parser.next();
            }

            if text.is_empty() {
                return ParseError::new("Empty quoted identifier", pivot, parser).err();
            }
            return Ok(text);
        }

        while !parser.eof() && (parser.current().is_alphanumeric() || parser.current() == '_' || parser.current() == '$') {
            parser.next();
        }

        if pivot == parser.position {
            return ParseError::new("Invalid identifier", pivot, parser).err();
        }

        Ok(parser.text_from_pivot(pivot))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::Identifier, QueryParser};

    #[test]
    pub fn test_identifier() {
        let text = "column";

        let mut parser = QueryParser::new(text);

        let result = Identifier::parse(&mut parser).expect("Failed to parse Identifier");

        assert_eq!(result.parts, vec!["column"]);
        assert_eq!(result.alias, None);
    }

    #[test]
    pub fn test_identifier_dotted() {
        let text = "db.table.column = 1";

        let mut parser = QueryParser::new(text);

        let result = Identifier::parse(&mut parser).expect("Failed to parse Identifier");

        assert_eq!(result.parts, vec!["db", "table", "column"]);
        assert_eq!(parser.current(), ' ');
    }

    #[test]
    pub fn test_identifier_quoted() {
        let text = "`my db`.`weird``name`";

        let mut parser = QueryParser::new(text);

        let result = Identifier::parse(&mut parser).expect("Failed to parse Identifier");

        assert_eq!(result.parts, vec!["my db", "weird`name"]);
        assert_eq!(result.get_string(), "`my db`.`weird``name`");
    }

    #[test]
    pub fn test_identifier_with_star() {
        let text = "t.*";

        let mut parser = QueryParser::new(text);

        let result = Identifier::parse(&mut parser).expect("Failed to parse Identifier");

        assert!(result.is_star());
        assert_eq!(result.get_string(), "t.*");
    }

    #[test]
    pub fn test_identifier_reserved_part_is_quoted() {
        let identifier = Identifier::new(&["t", "order"]);

        assert_eq!(identifier.get_string(), "t.`order`");
    }

    #[test]
    pub fn test_identifier_reserved_word() {
        let text = "FROM t";

        let mut parser = QueryParser::new(text);

        let result = Identifier::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.message, "Unexpected keyword");
                assert_eq!(err.start, 0);
            },
        }
    }

    #[test]
    pub fn test_identifier_trailing_dot() {
        let text = "t.";

        let mut parser = QueryParser::new(text);

        let result = Identifier::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.message, "Invalid identifier");
                assert_eq!(err.start, 2);
                assert_eq!(err.end, 2);
            },
        }
    }
}
