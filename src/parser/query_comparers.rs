use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::parser::{QueryParser, WordComparer};

/// Words that never parse as bare identifiers or implicit aliases.
pub static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "SELECT", "DISTINCT", "FROM", "WHERE", "GROUP", "BY", "HAVING", "ORDER", "LIMIT", "OFFSET",
        "JOIN", "INNER", "LEFT", "RIGHT", "FULL", "OUTER", "CROSS", "ON", "AS", "AND", "OR", "NOT",
        "IN", "IS", "LIKE", "BETWEEN", "ASC", "DESC", "WITH", "UNION", "NULL", "TRUE", "FALSE",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug)]
pub struct QueryComparers {
    pub with: WordComparer,
    pub select: WordComparer,
    pub distinct: WordComparer,
    pub alias: WordComparer,
    pub from: WordComparer,
    pub join: WordComparer,
    pub inner: WordComparer,
    pub left: WordComparer,
    pub right: WordComparer,
    pub full: WordComparer,
    pub outer: WordComparer,
    pub cross: WordComparer,
    pub on: WordComparer,
    pub r#where: WordComparer,
    pub group: WordComparer,
    pub by: WordComparer,
    pub having: WordComparer,
    pub order: WordComparer,
    pub asc: WordComparer,
    pub desc: WordComparer,
    pub limit: WordComparer,
    pub offset: WordComparer,
    pub and: WordComparer,
    pub or: WordComparer,
    pub not: WordComparer,
    pub is: WordComparer,
    pub like: WordComparer,
    pub r#in: WordComparer,
    pub between: WordComparer,
    pub equal: WordComparer,
    pub not_equal_b: WordComparer, // basic
    pub not_equal_c: WordComparer, // c
    pub greater_than: WordComparer,
    pub greater_than_or_equal: WordComparer,
    pub less_than: WordComparer,
    pub less_than_or_equal: WordComparer,
    pub b_true: WordComparer,
    pub b_false: WordComparer,
    pub null: WordComparer,
}

impl Default for QueryComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryComparers {
    pub fn new() -> Self {
        Self {
            with: WordComparer::keyword("WITH"),
            select: WordComparer::keyword("SELECT"),
            distinct: WordComparer::keyword("DISTINCT"),
            alias: WordComparer::keyword("AS"),
            from: WordComparer::keyword("FROM"),
            join: WordComparer::keyword("JOIN"),
            inner: WordComparer::keyword("INNER"),
            left: WordComparer::keyword("LEFT"),
            right: WordComparer::keyword("RIGHT"),
            full: WordComparer::keyword("FULL"),
            outer: WordComparer::keyword("OUTER"),
            cross: WordComparer::keyword("CROSS"),
            on: WordComparer::keyword("ON"),
            r#where: WordComparer::keyword("WHERE"),
            group: WordComparer::keyword("GROUP"),
            by: WordComparer::keyword("BY"),
            having: WordComparer::keyword("HAVING"),
            order: WordComparer::keyword("ORDER"),
            asc: WordComparer::keyword("ASC"),
            desc: WordComparer::keyword("DESC"),
            limit: WordComparer::keyword("LIMIT"),
            offset: WordComparer::keyword("OFFSET"),
            and: WordComparer::keyword("AND"),
            or: WordComparer::keyword("OR"),
            not: WordComparer::keyword("NOT"),
            is: WordComparer::keyword("IS"),
            like: WordComparer::keyword("LIKE"),
            r#in: WordComparer::keyword("IN"),
            between: WordComparer::keyword("BETWEEN"),
            equal: WordComparer::new("="),
            not_equal_b: WordComparer::new("<>"),
            not_equal_c: WordComparer::new("!="),
            greater_than: WordComparer::new(">"),
            greater_than_or_equal: WordComparer::new(">="),
            less_than: WordComparer::new("<"),
            less_than_or_equal: WordComparer::new("<="),
            b_true: WordComparer::keyword("TRUE"),
            b_false: WordComparer::keyword("FALSE"),
            null: WordComparer::keyword("NULL"),
        }
    }

    pub fn is_reserved_word(word: &str) -> bool {
        RESERVED_WORDS.contains(word.to_ascii_uppercase().as_str())
    }

    /// True when the word under the cursor is a reserved keyword.
    pub fn is_current_reserved(parser: &QueryParser) -> bool {
        let mut end = parser.position;
        while end < parser.length {
            let ch = parser.text_v[end];
            if !(ch.is_ascii_alphanumeric() || ch == '_') {
                break;
            }
            end += 1;
        }

        end > parser.position && Self::is_reserved_word(&parser.text_from_range(parser.position, end))
    }
}
