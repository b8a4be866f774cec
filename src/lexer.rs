use crate::ast::{Token, TokenKind};

/// A pull-based lexer over a query string.
///
/// Tokens are produced on demand, one per [`scan`](Lexer::scan) call, and
/// exactly one token can be pushed back with [`reject`](Lexer::reject) so
/// the grammar's single-token lookahead never needs stream rewinding.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    last: Option<Token>,
    pushback: Option<Token>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            last: None,
            pushback: None,
        }
    }

    /// Returns the next token.
    ///
    /// Once the input is exhausted every further call returns an
    /// end-of-input token. Lexical faults come back as `Error`-kind
    /// tokens carrying the offending text and a message; scanning can
    /// continue past them.
    pub fn scan(&mut self) -> Token {
        if let Some(token) = self.pushback.take() {
            self.last = Some(token.clone());
            return token;
        }
        let token = self.next_token();
        self.last = Some(token.clone());
        token
    }

    /// Discards whitespace tokens and returns the first significant one.
    pub fn scan_ignore_whitespace(&mut self) -> Token {
        loop {
            let token = self.scan();
            if token.kind != TokenKind::WhiteSpace {
                return token;
            }
        }
    }

    /// Pushes back the most recently returned token so the next scan
    /// returns it again.
    ///
    /// At most one pushback can be outstanding. Calling this twice
    /// without an intervening scan, or before anything was scanned, is a
    /// programmer error and panics rather than corrupting the stream.
    pub fn reject(&mut self) {
        assert!(
            self.pushback.is_none(),
            "reject() called twice without an intervening scan"
        );
        let token = self
            .last
            .take()
            .expect("reject() called before any token was scanned");
        self.pushback = Some(token);
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn token_from(&self, kind: TokenKind, start: usize) -> Token {
        let raw: String = self.input[start..self.position].iter().collect();
        Token::new(kind, raw, start)
    }

    fn next_token(&mut self) -> Token {
        let start = self.position;

        match self.current_char() {
            None => Token::new(TokenKind::Eof, "", start),
            Some(ch) if ch.is_whitespace() => {
                while let Some(c) = self.current_char() {
                    if c.is_whitespace() {
                        self.advance();
                    } else {
                        break;
                    }
                }
                self.token_from(TokenKind::WhiteSpace, start)
            }
            Some('*') => {
                self.advance();
                self.token_from(TokenKind::WildCard, start)
            }
            Some('.') => {
                self.advance();
                self.token_from(TokenKind::Dot, start)
            }
            Some(',') => {
                self.advance();
                self.token_from(TokenKind::Comma, start)
            }
            Some('(') => {
                self.advance();
                self.token_from(TokenKind::LParen, start)
            }
            Some(')') => {
                self.advance();
                self.token_from(TokenKind::RParen, start)
            }
            Some('=') => {
                self.advance();
                self.token_from(TokenKind::Equal, start)
            }
            Some('<') => {
                self.advance();
                match self.current_char() {
                    Some('=') => {
                        self.advance();
                        self.token_from(TokenKind::LessEq, start)
                    }
                    Some('>') => {
                        self.advance();
                        self.token_from(TokenKind::NotEqual, start)
                    }
                    _ => self.token_from(TokenKind::LessThan, start),
                }
            }
            Some('>') => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    self.token_from(TokenKind::GreaterEq, start)
                } else {
                    self.token_from(TokenKind::GreaterThan, start)
                }
            }
            Some('!') => {
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                    self.token_from(TokenKind::NotEqual, start)
                } else {
                    self.token_from(
                        TokenKind::Error("unexpected `!`, did you mean `!=`".to_string()),
                        start,
                    )
                }
            }
            Some('\'') => self.read_quoted('\'', TokenKind::Literal1, start),
            Some('"') => self.read_quoted('"', TokenKind::Literal2, start),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let word = self.read_identifier();
                let kind = match word.to_ascii_lowercase().as_str() {
                    "select" => TokenKind::Select,
                    "from" => TokenKind::From,
                    "where" => TokenKind::Where,
                    "and" => TokenKind::And,
                    "or" => TokenKind::Or,
                    "not" => TokenKind::Not,
                    "like" => TokenKind::Like,
                    "is" => TokenKind::Is,
                    "null" => TokenKind::Null,
                    "true" => TokenKind::True,
                    "false" => TokenKind::False,
                    _ => TokenKind::Alpha,
                };
                self.token_from(kind, start)
            }
            Some(ch) if ch.is_ascii_digit() => {
                self.read_number();
                self.token_from(TokenKind::Number, start)
            }
            Some(ch) => {
                self.advance();
                self.token_from(
                    TokenKind::Error(format!("unexpected character '{}'", ch)),
                    start,
                )
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_number(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads a quoted literal. The raw lexeme keeps the quotes and any
    /// escape sequences; only `\<quote>` counts as an escape, any other
    /// backslash is an ordinary character.
    fn read_quoted(&mut self, quote: char, kind: TokenKind, start: usize) -> Token {
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            if ch == '\\' && self.peek_char(1) == Some(quote) {
                self.advance();
                self.advance();
            } else if ch == quote {
                self.advance();
                return self.token_from(kind, start);
            } else {
                self.advance();
            }
        }

        self.token_from(
            TokenKind::Error("unterminated string literal".to_string()),
            start,
        )
    }
}

#[test]
fn test_keywords_case_insensitive() {
    let mut lexer = Lexer::new("select FROM Where aNd");
    assert_eq!(lexer.scan().kind, TokenKind::Select);
    assert_eq!(lexer.scan_ignore_whitespace().kind, TokenKind::From);
    assert_eq!(lexer.scan_ignore_whitespace().kind, TokenKind::Where);
    assert_eq!(lexer.scan_ignore_whitespace().kind, TokenKind::And);
    assert_eq!(lexer.scan().kind, TokenKind::Eof);
}

#[test]
fn test_reject_replays_token() {
    let mut lexer = Lexer::new("a, b");
    let first = lexer.scan();
    assert_eq!(first.kind, TokenKind::Alpha);
    lexer.reject();
    assert_eq!(lexer.scan(), first);
    assert_eq!(lexer.scan().kind, TokenKind::Comma);
}
