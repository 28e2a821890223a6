use crate::parser::QueryParser;

#[derive(Debug, Default)]
pub struct WordComparer {
    pub length: usize,
    pub word: Vec<char>,
    delimiter_postfix: bool,
    eof: bool,
}

impl WordComparer {
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.to_uppercase().chars().collect();
        Self {
            length: word.len(),
            word,
            delimiter_postfix: false,
            eof: false,
        }
    }

    /// A keyword must end at a delimiter or at the end of the text.
    pub fn keyword(word: &str) -> Self {
        Self::new(word).with_any_delimiter_postfix().with_eof()
    }

    fn reach_eof(&self, parser: &QueryParser) -> bool {
        parser.position + self.length >= parser.length
    }

    fn is_block_delimiter(ch: char) -> bool {
        ch.is_whitespace()
    }

    fn is_any_delimiter(ch: char) -> bool {
        ch == ',' || ch == '(' || ch == ')' || ch == '.' || ch == ';' || Self::is_block_delimiter(ch)
    }

    pub fn compare(&self, parser: &QueryParser) -> bool {
        let mut position = 0;
        while position < self.length {
            if (parser.position + position) >= parser.length ||
                self.word[position] != parser.text_v[parser.position + position].to_ascii_uppercase() {
                return false;
            }
            position += 1;
        }

        if self.reach_eof(parser) {
            return self.eof || !self.delimiter_postfix;
        }

        if !self.delimiter_postfix {
            return true;
        }

        Self::is_any_delimiter(parser.text_v[parser.position + position])
    }

    pub fn with_eof(mut self) -> Self { self.eof = true; self }
    pub fn with_any_delimiter_postfix(mut self) -> Self { self.delimiter_postfix = true; self }
}

#[cfg(test)]
mod tests {
    use crate::parser::{QueryParser, WordComparer};

    #[test]
    pub fn test_keyword_case_insensitive() {
        let parser = QueryParser::new("select a");

        assert!(WordComparer::keyword("SELECT").compare(&parser));
    }

    #[test]
    pub fn test_keyword_requires_delimiter() {
        let parser = QueryParser::new("selected");

        assert!(!WordComparer::keyword("SELECT").compare(&parser));
    }

    #[test]
    pub fn test_keyword_at_eof() {
        let parser = QueryParser::new("desc");

        assert!(WordComparer::keyword("DESC").compare(&parser));
    }

    #[test]
    pub fn test_keyword_before_parentheses() {
        let parser = QueryParser::new("IN(1, 2)");

        assert!(WordComparer::keyword("IN").compare(&parser));
    }

    #[test]
    pub fn test_symbol_without_postfix() {
        let parser = QueryParser::new("<=b");

        assert!(WordComparer::new("<=").compare(&parser));
        assert!(WordComparer::new("<").compare(&parser));
        assert!(!WordComparer::new("<>").compare(&parser));
    }

    #[test]
    pub fn test_keyword_before_comma_and_semicolon() {
        assert!(WordComparer::keyword("ASC").compare(&QueryParser::new("ASC,")));
        assert!(WordComparer::keyword("ASC").compare(&QueryParser::new("asc;")));
        assert!(!WordComparer::keyword("ASC").compare(&QueryParser::new("ASC+")));
    }
}
