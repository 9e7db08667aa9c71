//! Lexer for structured markup.
//!
//! Converts input text into a stream of tokens. The lexer never fails: a `<`
//! that does not start a well-formed tag comes out as text.

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// Opening tag content (without brackets): `color:red`
    OpenTag(&'a str),
    /// Closing tag content (without brackets and slash): `bold` for `</bold>`
    CloseTag(&'a str),
    /// Escaped character: `\<` or `\\`.
    Escaped(char),
}

/// Lexer for structured markup text.
///
/// # Examples
///
/// ```
/// use minimark::parser::Lexer;
///
/// let tokens: Vec<_> = Lexer::new("<bold>Hello</bold>").collect();
/// assert_eq!(tokens.len(), 3);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume `len` bytes and return them.
    fn take(&mut self, len: usize) -> &'a str {
        let taken = &self.input[self.pos..self.pos + len];
        self.pos += len;
        taken
    }

    /// Consume text until we hit a special character or end of input.
    fn consume_text(&mut self) -> &'a str {
        let len = self
            .remaining()
            .find(['<', '\\'])
            .unwrap_or(self.remaining().len());
        self.take(len)
    }

    /// Consume a tag (including the brackets), or a lone `<` as text.
    fn consume_tag(&mut self) -> Token<'a> {
        let body = &self.remaining()[1..];
        let close = body.find(['<', '>']);

        match close {
            Some(end) if body[end..].starts_with('>') && end > 0 => {
                let content = &body[..end];
                self.pos += end + 2;
                match content.strip_prefix('/') {
                    Some(name) => Token::CloseTag(name),
                    None => Token::OpenTag(content),
                }
            }
            _ => Token::Text(self.take(1)),
        }
    }

    /// Consume an escape sequence, or a lone `\` as text.
    fn consume_escape(&mut self) -> Token<'a> {
        match self.remaining()[1..].chars().next() {
            Some(c @ ('<' | '\\')) => {
                self.pos += 1 + c.len_utf8();
                Token::Escaped(c)
            }
            _ => Token::Text(self.take(1)),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peek()? {
            '<' => Some(self.consume_tag()),
            '\\' => Some(self.consume_escape()),
            _ => Some(Token::Text(self.consume_text())),
        }
    }
}
