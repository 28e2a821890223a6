use crate::parser::{
    ast::{
        BetweenOperation, BinaryOp, BoolParser, Constant, Function, Identifier, Node, NullParser,
        NumberParser, ParamParser, Select, StringParser, UnaryOp,
    },
    ParseError, QueryComparers, QueryParser,
};

/// Recursive-descent parser for scalar and boolean expressions.
///
/// Precedence, lowest first: `OR`, `AND`, `NOT`, comparisons (`=`, `IS`,
/// `LIKE`, `IN`, `BETWEEN`), `+ -`, `* / %`, unary minus.
pub struct ExpressionParser;

impl ExpressionParser {
    pub fn parse(parser: &mut QueryParser) -> Result<Node, ParseError> {
        parser.next_non_whitespace();
        Self::parse_or(parser)
    }

    /// Comma separated expressions, each with an optional alias.
    pub fn parse_list(parser: &mut QueryParser, allow_alias: bool) -> Result<Vec<Node>, ParseError> {
        let mut nodes = vec![];
        loop {
            let mut node = Self::parse(parser)?;
            if allow_alias {
                if let Some(alias) = Self::parse_alias(parser)? {
                    let pivot = parser.position;
                    if !node.set_alias(alias) {
                        return ParseError::new("Alias not allowed here", pivot, parser).err();
                    }
                }
            }
            nodes.push(node);

            parser.next_non_whitespace();
            if parser.current() != ',' {
                break;
            }
            parser.next();
        }

        Ok(nodes)
    }

    /// `AS name`, or a bare non-reserved word following an expression.
    pub fn parse_alias(parser: &mut QueryParser) -> Result<Option<String>, ParseError> {
        parser.next_non_whitespace();

        let explicit = parser.consume(|c| &c.alias);
        if !explicit && (!Identifier::is_start(parser) || QueryComparers::is_current_reserved(parser)) {
            return Ok(None);
        }

        let pivot = parser.position;
        if !Identifier::is_start(parser) {
            return ParseError::new("Invalid alias", pivot, parser).err();
        }

        let identifier = Identifier::parse(parser)?;
        if identifier.parts.len() != 1 || identifier.is_star() {
            return ParseError::new("Invalid alias", pivot, parser).err();
        }
        parser.next_non_whitespace();

        Ok(identifier.parts.into_iter().next())
    }

    fn parse_or(parser: &mut QueryParser) -> Result<Node, ParseError> {
        let mut left = Self::parse_and(parser)?;
        while parser.consume(|c| &c.or) {
            let right = Self::parse_and(parser)?;
            left = Node::binary(BinaryOp::Or, left, right);
        }
        Ok(left)
    }

    fn parse_and(parser: &mut QueryParser) -> Result<Node, ParseError> {
        let mut left = Self::parse_not(parser)?;
        while parser.consume(|c| &c.and) {
            let right = Self::parse_not(parser)?;
            left = Node::binary(BinaryOp::And, left, right);
        }
        Ok(left)
    }

    fn parse_not(parser: &mut QueryParser) -> Result<Node, ParseError> {
        if parser.consume(|c| &c.not) {
            let arg = Self::parse_not(parser)?;
            return Ok(Node::unary(UnaryOp::Not, arg));
        }
        Self::parse_comparison(parser)
    }

    fn parse_comparison(parser: &mut QueryParser) -> Result<Node, ParseError> {
        let left = Self::parse_additive(parser)?;
        parser.next_non_whitespace();

        if let Some(op) = BinaryOp::check_comparator(parser) {
            let right = Self::parse_additive(parser)?;
            return Ok(Node::binary(op, left, right));
        }

        if parser.consume(|c| &c.is) {
            let op = match parser.consume(|c| &c.not) {
                true => BinaryOp::IsNot,
                false => BinaryOp::Is,
            };
            let right = Self::parse_additive(parser)?;
            return Ok(Node::binary(op, left, right));
        }

        let pivot = parser.position;
        let negated = parser.consume(|c| &c.not);

        if parser.consume(|c| &c.like) {
            let op = if negated { BinaryOp::NotLike } else { BinaryOp::Like };
            let right = Self::parse_additive(parser)?;
            return Ok(Node::binary(op, left, right));
        }

        if parser.consume(|c| &c.r#in) {
            let op = if negated { BinaryOp::NotIn } else { BinaryOp::In };
            let right = Self::parse_in_list(parser)?;
            return Ok(Node::binary(op, left, right));
        }

        if parser.consume(|c| &c.between) {
            let low = Self::parse_additive(parser)?;
            parser.expect(|c| &c.and, "Expected AND in BETWEEN")?;
            let high = Self::parse_additive(parser)?;
            return Ok(Node::BetweenOperation(BetweenOperation {
                expr: Box::new(left),
                low: Box::new(low),
                high: Box::new(high),
                negated,
                parentheses: false,
                alias: None,
            }));
        }

        if negated {
            return ParseError::new("Invalid predicate", pivot, parser).err();
        }

        Ok(left)
    }

    fn parse_in_list(parser: &mut QueryParser) -> Result<Node, ParseError> {
        parser.expect_char('(', "Expected ( after IN")?;

        if parser.is_next(|c| &c.select) {
            let mut select = Select::parse(parser)?;
            select.parentheses = true;
            parser.expect_char(')', "Expected ) after sub-select")?;
            return Ok(Node::Select(Box::new(select)));
        }

        let items = Self::parse_list(parser, false)?;
        parser.expect_char(')', "Expected ) after IN list")?;
        Ok(Node::Tuple(items))
    }

    fn parse_additive(parser: &mut QueryParser) -> Result<Node, ParseError> {
        let mut left = Self::parse_term(parser)?;
        parser.next_non_whitespace();
        while let Some(op) = BinaryOp::check_additive(parser) {
            let right = Self::parse_term(parser)?;
            left = Node::binary(op, left, right);
            parser.next_non_whitespace();
        }
        Ok(left)
    }

    fn parse_term(parser: &mut QueryParser) -> Result<Node, ParseError> {
        let mut left = Self::parse_unary(parser)?;
        parser.next_non_whitespace();
        while let Some(op) = BinaryOp::check_multiplicative(parser) {
            let right = Self::parse_unary(parser)?;
            left = Node::binary(op, left, right);
            parser.next_non_whitespace();
        }
        Ok(left)
    }

    fn parse_unary(parser: &mut QueryParser) -> Result<Node, ParseError> {
        parser.next_non_whitespace();

        if parser.current() == '+' {
            parser.next();
            return Self::parse_unary(parser);
        }

        if parser.current() != '-' {
            return Self::parse_primary(parser);
        }

        parser.next();
        parser.next_non_whitespace();

        // a minus sign directly in front of a number belongs to the literal
        if NumberParser::is_number(parser) {
            let value = NumberParser::parse_signed(parser, true)?;
            return Ok(Node::Constant(Constant::new(value)));
        }

        let arg = Self::parse_unary(parser)?;
        Ok(Node::unary(UnaryOp::Neg, arg))
    }

    fn parse_primary(parser: &mut QueryParser) -> Result<Node, ParseError> {
        parser.next_non_whitespace();
        let pivot = parser.position;

        if parser.eof() {
            return ParseError::new("Invalid expression", pivot, parser).err();
        }

        if parser.current() == '(' {
            parser.next();
            parser.next_non_whitespace();

            if parser.is_next(|c| &c.select) {
                let mut select = Select::parse(parser)?;
                parser.expect_char(')', "Expected ) after sub-select")?;
                select.parentheses = true;
                return Ok(Node::Select(Box::new(select)));
            }

            let mut node = Self::parse(parser)?;
            parser.expect_char(')', "Expected )")?;
            node.set_parentheses();
            return Ok(node);
        }

        if NumberParser::is_number(parser) {
            return NumberParser::parse(parser).map(|value| Node::Constant(Constant::new(value)));
        }

        if StringParser::is_string_delimiter(parser) {
            return StringParser::parse(parser).map(|value| Node::Constant(Constant::new(value)));
        }

        if ParamParser::is_param(parser) {
            return ParamParser::parse(parser).map(|value| Node::Constant(Constant::new(value)));
        }

        if BoolParser::is_bool(parser) {
            return BoolParser::parse(parser).map(|value| Node::Constant(Constant::new(value)));
        }

        if NullParser::is_null(parser) {
            return NullParser::parse(parser).map(|value| Node::Constant(Constant::new(value)));
        }

        if parser.current() == '*' {
            parser.next();
            return Ok(Node::Star);
        }

        if !Identifier::is_start(parser) {
            return ParseError::new("Invalid expression", pivot, parser).err();
        }

        let identifier = Identifier::parse(parser)?;

        if parser.current() == '(' && !identifier.is_star() {
            return Self::parse_function(parser, identifier.parts.join("."));
        }

        Ok(Node::Identifier(identifier))
    }

    fn parse_function(parser: &mut QueryParser, name: String) -> Result<Node, ParseError> {
        parser.next();
        parser.next_non_whitespace();

        let distinct = parser.consume(|c| &c.distinct);
        let args = match parser.current() {
            ')' => vec![],
            _ => Self::parse_list(parser, false)?,
        };
        parser.expect_char(')', "Expected ) after function arguments")?;

        Ok(Node::Function(Function { name, args, distinct, alias: None }))
    }
}
