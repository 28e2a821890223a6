// WITH recent AS (SELECT id FROM db.orders WHERE created > '2024-01-01')
// SELECT DISTINCT a.full_name AS name, COUNT(*) AS total
// FROM db.people a
// INNER JOIN recent r ON r.id = a.id
// WHERE a.age > 16 AND (a.city = 'Porto' OR a.city LIKE 'Mat%')
// GROUP BY a.full_name
// HAVING COUNT(*) > 3
// ORDER BY name DESC
// LIMIT 20 OFFSET 60

use std::fmt;

use crate::parser::{
    ast::{node::write_list, Constant, ExpressionParser, Identifier, Join, LimitAndOffsetParser, Node, OrderBy},
    ParseError, Phase, QueryParser,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CommonTableExpr {
    pub name: String,
    /// Always a `Node::Select`.
    pub query: Node,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    pub cte: Vec<CommonTableExpr>,
    pub distinct: bool,
    pub targets: Vec<Node>,
    pub from_table: Option<Node>,
    pub where_clause: Option<Node>,
    pub group_by: Vec<Node>,
    pub having: Option<Node>,
    pub order_by: Vec<OrderBy>,
    pub limit: Option<Constant>,
    pub offset: Option<Constant>,
    pub alias: Option<String>,
    pub parentheses: bool,
}

impl Select {
    /// `[WITH name AS (select), ...] select`
    pub fn parse_statement(parser: &mut QueryParser) -> Result<Self, ParseError> {
        parser.next_non_whitespace();

        let mut cte = vec![];
        if parser.consume(|c| &c.with) {
            loop {
                let pivot = parser.position;
                let mut name = Identifier::parse(parser)?;
                if name.parts.len() != 1 || name.is_star() {
                    return ParseError::new("Invalid common table expression name", pivot, parser).err();
                }
                parser.next_non_whitespace();
                parser.expect(|c| &c.alias, "Expected AS in common table expression")?;
                parser.expect_char('(', "Expected ( in common table expression")?;
                let query = Select::parse(parser)?;
                parser.expect_char(')', "Expected ) after common table expression")?;

                cte.push(CommonTableExpr {
                    name: name.parts.remove(0),
                    query: Node::Select(Box::new(query)),
                });

                if parser.current() != ',' {
                    break;
                }
                parser.next();
                parser.next_non_whitespace();
            }
        }

        let mut select = Select::parse(parser)?;
        select.cte = cte;
        Ok(select)
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Self, ParseError> {
        parser.next_non_whitespace();
        parser.expect(|c| &c.select, "Invalid select statement")?;

        let mut select = Select {
            distinct: parser.consume(|c| &c.distinct),
            targets: ExpressionParser::parse_list(parser, true)?,
            ..Default::default()
        };

        let mut phase = Phase::Projection;
        loop {
            let pivot = parser.position;
            let Some(next) = parser.next_phase()? else {
                break;
            };

            if next <= phase {
                return ParseError::new("Unexpected clause", pivot, parser).err();
            }

            match next {
                Phase::Projection => {},
                Phase::Collections => select.from_table = Some(Join::parse_from(parser)?),
                Phase::Criteria => select.where_clause = Some(ExpressionParser::parse(parser)?),
                Phase::Aggregates => select.group_by = ExpressionParser::parse_list(parser, false)?,
                Phase::Having => select.having = Some(ExpressionParser::parse(parser)?),
                Phase::OrderBy => select.order_by = OrderBy::parse(parser)?,
                Phase::LimitAndOffset => {
                    let (limit, offset) = LimitAndOffsetParser::parse(parser)?;
                    select.limit = limit;
                    select.offset = offset;
                },
            }
            phase = next;
        }

        Ok(select)
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parentheses {
            write!(f, "(")?;
        }

        if !self.cte.is_empty() {
            write!(f, "WITH ")?;
            for (index, cte) in self.cte.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{} AS ({})", Identifier::quote_part(&cte.name), cte.query)?;
            }
            write!(f, " ")?;
        }

        write!(f, "SELECT ")?;
        if self.distinct {
            write!(f, "DISTINCT ")?;
        }
        write_list(f, &self.targets)?;

        if let Some(from_table) = &self.from_table {
            write!(f, " FROM {}", from_table)?;
        }
        if let Some(where_clause) = &self.where_clause {
            write!(f, " WHERE {}", where_clause)?;
        }
        if !self.group_by.is_empty() {
            write!(f, " GROUP BY ")?;
            write_list(f, &self.group_by)?;
        }
        if let Some(having) = &self.having {
            write!(f, " HAVING {}", having)?;
        }
        if !self.order_by.is_empty() {
            let order_by = self.order_by.iter().map(|o| o.to_string()).collect::<Vec<_>>().join(", ");
            write!(f, " ORDER BY {}", order_by)?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " LIMIT {}", limit)?;
        }
        if let Some(offset) = &self.offset {
            write!(f, " OFFSET {}", offset)?;
        }

        if self.parentheses {
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{ConstantValue, Node, Select, SortDirection}, QueryParser};

    #[test]
    pub fn test_select() {
        let text = r#"
SELECT DISTINCT a.full_name AS name, COUNT(*) AS total
FROM db.people a
INNER JOIN db.orders o ON o.person_id = a.id
WHERE a.age > 16 AND (a.city = 'Porto' OR a.city LIKE "Mat%")
GROUP BY a.full_name
HAVING COUNT(*) > 3
ORDER BY name DESC
LIMIT 20 OFFSET 60
        "#;

        let mut parser = QueryParser::new(text);
        let select = Select::parse(&mut parser).expect("Failed to parse select");

        assert!(select.distinct);
        assert_eq!(select.targets.len(), 2);
        assert!(matches!(select.from_table, Some(Node::Join(_))));
        assert!(select.where_clause.is_some());
        assert_eq!(select.group_by.len(), 1);
        assert!(select.having.is_some());
        assert_eq!(select.order_by[0].direction, Some(SortDirection::Desc));
        assert_eq!(select.limit.map(|l| l.value), Some(ConstantValue::Int(20)));
        assert_eq!(select.offset.map(|o| o.value), Some(ConstantValue::Int(60)));
    }

    #[test]
    pub fn test_select_render() {
        let text = "select a, b as c from t where x = 1 and y <> 'z' order by a limit 5";

        let mut parser = QueryParser::new(text);
        let select = Select::parse(&mut parser).expect("Failed to parse select");

        assert_eq!(select.to_string(), "SELECT a, b AS c FROM t WHERE x = 1 AND y <> 'z' ORDER BY a LIMIT 5");
    }

    #[test]
    pub fn test_select_without_from() {
        let mut parser = QueryParser::new("SELECT 1 + 1 AS two");
        let select = Select::parse(&mut parser).expect("Failed to parse select");

        assert!(select.from_table.is_none());
        assert_eq!(select.to_string(), "SELECT 1 + 1 AS two");
    }

    #[test]
    pub fn test_with_statement() {
        let text = "WITH r AS (SELECT id FROM orders), s AS (SELECT 1) SELECT * FROM r";

        let mut parser = QueryParser::new(text);
        let select = Select::parse_statement(&mut parser).expect("Failed to parse statement");

        assert_eq!(select.cte.len(), 2);
        assert_eq!(select.cte[0].name, "r");
        assert_eq!(select.to_string(), text);
    }

    #[test]
    pub fn test_clause_out_of_order() {
        let text = "SELECT a FROM t ORDER BY a WHERE a = 1";

        let mut parser = QueryParser::new(text);
        let result = Select::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.message, "Unexpected clause");
                assert_eq!(err.start, 27);
            },
        }
    }

    #[test]
    pub fn test_not_a_select() {
        let mut parser = QueryParser::new("UPDATE t SET a = 1");

        let result = Select::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.message, "Invalid select statement");
                assert_eq!(err.start, 0);
            },
        }
    }
}
