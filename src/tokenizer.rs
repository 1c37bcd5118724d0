const DELIMITER: char = ',';
const QUOTE: char = '\'';

/// Splits a comma-separated list into trimmed fields.
///
/// Single quotes enclose a field so it may contain commas; the enclosing
/// quotes are dropped and a doubled quote inside them stands for one quote.
pub struct FieldTokenizer {
    /// The input string stored as a vector of characters for easy iteration.
    input: Vec<char>,
    /// The current position in the character vector.
    position: usize,
}

impl FieldTokenizer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Processes the entire input and returns the fields in order.
    ///
    /// An empty input yields a single empty field. An unterminated quote runs
    /// to the end of the input.
    ///
    /// # Example
    /// ```
    /// # use linedb::tokenizer::FieldTokenizer;
    /// let fields = FieldTokenizer::new("1, 'Appleseed, John'").tokenize();
    /// assert_eq!(fields, vec!["1", "Appleseed, John"]);
    /// ```
    pub fn tokenize(&mut self) -> Vec<String> {
        let mut fields = Vec::new();

        loop {
            fields.push(self.read_field());
            if self.is_at_end() {
                break;
            }
            // Skip the delimiter
            self.advance();
        }

        fields
    }

    // --- Navigation Helpers ---

    fn current_char(&self) -> char {
        self.input[self.position]
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    // --- Extraction Logic ---

    /// Reads one field up to the next unquoted delimiter.
    fn read_field(&mut self) -> String {
        self.skip_whitespace();

        let mut field = String::new();
        if !self.is_at_end() && self.current_char() == QUOTE {
            self.advance();
            self.read_quoted(&mut field);
        }

        while !self.is_at_end() && self.current_char() != DELIMITER {
            field.push(self.current_char());
            self.advance();
        }

        field.trim().to_string()
    }

    /// Reads the body of a quoted section, consuming the closing quote.
    fn read_quoted(&mut self, field: &mut String) {
        while !self.is_at_end() {
            let ch = self.current_char();
            self.advance();

            if ch != QUOTE {
                field.push(ch);
            } else if !self.is_at_end() && self.current_char() == QUOTE {
                field.push(QUOTE);
                self.advance();
            } else {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(input: &str) -> Vec<String> {
        FieldTokenizer::new(input).tokenize()
    }

    #[test]
    fn test_plain_fields() {
        assert_eq!(fields("id, name,age"), vec!["id", "name", "age"]);
    }

    #[test]
    fn test_quoted_comma() {
        assert_eq!(
            fields("1, 'Appleseed, John'"),
            vec!["1", "Appleseed, John"]
        );
    }

    #[test]
    fn test_quotes_are_removed_and_content_trimmed() {
        assert_eq!(fields("' John ', 'x'"), vec!["John", "x"]);
    }

    #[test]
    fn test_doubled_quote() {
        assert_eq!(fields("'O''Brien'"), vec!["O'Brien"]);
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(fields(""), vec![""]);
        assert_eq!(fields("a,,b,"), vec!["a", "", "b", ""]);
        assert_eq!(fields("''"), vec![""]);
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(fields("'abc, def"), vec!["abc, def"]);
    }
}
