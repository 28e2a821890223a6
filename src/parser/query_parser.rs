use crate::parser::{ParseError, Phase, QueryComparers, WordComparer};

#[derive(Debug, Default)]
pub struct QueryParser {
    pub position: usize,
    pub length: usize,
    pub text_v: Vec<char>,
    pub text: String,
    pub comparers: QueryComparers,
}

impl QueryParser {
    pub fn new(query: &str) -> Self {
        let text_v: Vec<char> = query.chars().collect();
        Self {
            position: 0,
            length: text_v.len(),
            text_v,
            text: query.to_string(),
            comparers: QueryComparers::new(),
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn current(&self) -> char {
        self.peek(0)
    }

    pub fn peek(&self, ahead: usize) -> char {
        if self.position + ahead < self.length {
            return self.text_v[self.position + ahead];
        }

        '\0'
    }

    pub fn next(&mut self) {
        if self.position < self.length {
            self.position += 1;
        }
    }

    pub fn next_non_whitespace(&mut self) {
        while !self.eof() && self.current().is_whitespace() {
            self.next();
        }
    }

    pub fn jump(&mut self, ahead: usize) {
        self.position = (self.position + ahead).min(self.length);
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.length);
        let start = start.min(end);
        self.text_v[start..end].iter().collect()
    }

    pub fn text_from_pivot(&self, pivot: usize) -> String {
        self.text_from_range(pivot, self.position)
    }

    /// Consumes the word picked from the comparers (and any trailing
    /// whitespace) when it is under the cursor.
    pub fn consume(&mut self, pick: fn(&QueryComparers) -> &WordComparer) -> bool {
        let comparer = pick(&self.comparers);
        if !comparer.compare(self) {
            return false;
        }

        let length = comparer.length;
        self.jump(length);
        self.next_non_whitespace();
        true
    }

    pub fn is_next(&self, pick: fn(&QueryComparers) -> &WordComparer) -> bool {
        pick(&self.comparers).compare(self)
    }

    pub fn expect(&mut self, pick: fn(&QueryComparers) -> &WordComparer, message: &str) -> Result<(), ParseError> {
        if self.consume(pick) {
            return Ok(());
        }

        ParseError::new(message, self.position, self).err()
    }

    pub fn expect_char(&mut self, expected: char, message: &str) -> Result<(), ParseError> {
        self.next_non_whitespace();
        if self.current() != expected {
            return ParseError::new(message, self.position, self).err();
        }

        self.next();
        self.next_non_whitespace();
        Ok(())
    }

    /// Detects the clause keyword under the cursor and consumes it.
    ///
    /// Returns `None` when the cursor does not sit on a clause keyword, which
    /// ends the current `SELECT` (end of text, `)`, `;`, ...).
    pub fn next_phase(&mut self) -> Result<Option<Phase>, ParseError> {
        self.next_non_whitespace();

        if self.eof() {
            return Ok(None);
        }

        if self.consume(|c| &c.from) {
            return Ok(Some(Phase::Collections));
        }

        if self.consume(|c| &c.r#where) {
            return Ok(Some(Phase::Criteria));
        }

        if self.consume(|c| &c.group) {
            self.expect(|c| &c.by, "Expected BY after GROUP")?;
            return Ok(Some(Phase::Aggregates));
        }

        if self.consume(|c| &c.having) {
            return Ok(Some(Phase::Having));
        }

        if self.consume(|c| &c.order) {
            self.expect(|c| &c.by, "Expected BY after ORDER")?;
            return Ok(Some(Phase::OrderBy));
        }

        if self.is_next(|c| &c.limit) || self.is_next(|c| &c.offset) {
            return Ok(Some(Phase::LimitAndOffset));
        }

        Ok(None)
    }
}
