use crate::parser::{ast::{Constant, ConstantValue, NumberParser}, ParseError, QueryParser};

pub struct LimitAndOffsetParser;

impl LimitAndOffsetParser {
    /// Parses `LIMIT n [OFFSET m]`, `LIMIT m, n` and `OFFSET m [LIMIT n]`.
    pub fn parse(parser: &mut QueryParser) -> Result<(Option<Constant>, Option<Constant>), ParseError> {
        let mut limit: Option<Constant> = None;
        let mut offset: Option<Constant> = None;

        loop {
            parser.next_non_whitespace();
            let pivot = parser.position;

            if parser.consume(|c| &c.limit) {
                if limit.is_some() {
                    return ParseError::new("Duplicated LIMIT", pivot, parser).err();
                }
                let first = Self::parse_count(parser)?;
                parser.next_non_whitespace();

                if parser.current() == ',' {
                    parser.next();
                    parser.next_non_whitespace();
                    if offset.is_some() {
                        return ParseError::new("Duplicated OFFSET", pivot, parser).err();
                    }
                    offset = Some(first);
                    limit = Some(Self::parse_count(parser)?);
                } else {
                    limit = Some(first);
                }
                continue;
            }

            if parser.consume(|c| &c.offset) {
                if offset.is_some() {
                    return ParseError::new("Duplicated OFFSET", pivot, parser).err();
                }
                offset = Some(Self::parse_count(parser)?);
                continue;
            }

            break;
        }

        Ok((limit, offset))
    }

    fn parse_count(parser: &mut QueryParser) -> Result<Constant, ParseError> {
        parser.next_non_whitespace();
        let pivot = parser.position;

        match NumberParser::parse(parser)? {
            ConstantValue::Int(value) if value >= 0 => Ok(Constant::new(ConstantValue::Int(value))),
            _ => ParseError::new("Invalid number of rows", pivot, parser).err(),
        }
    }
}
