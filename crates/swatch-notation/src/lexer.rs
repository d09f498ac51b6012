use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Hex digits following `#`, not yet validated for length.
    Hex(String),
    Ident(String),
    Number(f32),
    LParen,
    RParen,
    Comma,
    Eof,
}

/// A token together with the 1-based column where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<Spanned>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let eof = tok.token == Token::Eof;
            tokens.push(tok);
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        self.col += 1;
        Some(ch)
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'s str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if pred(c)) {
            self.advance();
        }
        &self.src[start..self.pos]
    }

    fn next_token(&mut self) -> Result<Spanned, ParseError> {
        self.take_while(char::is_whitespace);

        let col = self.col;
        let ch = match self.peek() {
            None => return Ok(Spanned { token: Token::Eof, col }),
            Some(c) => c,
        };

        let token = match ch {
            '(' => { self.advance(); Token::LParen }
            ')' => { self.advance(); Token::RParen }
            ',' => { self.advance(); Token::Comma }
            '#' => {
                self.advance();
                Token::Hex(self.take_while(|c| c.is_ascii_alphanumeric()).to_string())
            }
            c if c.is_ascii_digit() || c == '.' || c == '-' => self.lex_number(col)?,
            c if c.is_ascii_alphabetic() => {
                Token::Ident(self.take_while(|c| c.is_ascii_alphanumeric()).to_string())
            }
            other => {
                return Err(ParseError::new(format!("unexpected character {other:?}"), col));
            }
        };
        Ok(Spanned { token, col })
    }

    fn lex_number(&mut self, col: usize) -> Result<Token, ParseError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        self.take_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') {
            self.advance();
            self.take_while(|c| c.is_ascii_digit());
        }
        let text = &self.src[start..self.pos];
        text.parse::<f32>()
            .map(Token::Number)
            .map_err(|_| ParseError::new(format!("invalid number {text:?}"), col))
    }
}
