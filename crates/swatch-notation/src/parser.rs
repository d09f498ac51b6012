use crate::error::ParseError;
use crate::lexer::{Lexer, Spanned, Token};
use crate::palette;

/// A parsed color: straight-alpha sRGB components normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorLiteral {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorLiteral {
    pub fn from_bytes([r, g, b, a]: [u8; 4]) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }
}

/// Parses a single color literal.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
/// `rgba(r, g, b, a)` with normalized components, and palette names.
pub fn parse_color(src: &str) -> Result<ColorLiteral, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser { tokens, pos: 0 }.parse()
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Spanned {
        // tokenize always terminates the stream with Eof.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) -> Spanned {
        let tok = self.peek().clone();
        self.pos += 1;
        tok
    }

    fn expect(&mut self, want: Token, what: &str) -> Result<(), ParseError> {
        let tok = self.bump();
        if tok.token == want {
            Ok(())
        } else {
            Err(ParseError::new(format!("expected {what}, got {:?}", tok.token), tok.col))
        }
    }

    fn parse(mut self) -> Result<ColorLiteral, ParseError> {
        let first = self.bump();
        let color = match first.token {
            Token::Hex(digits) => ColorLiteral::from_bytes(hex_bytes(&digits, first.col)?),
            Token::Ident(name) if self.peek().token == Token::LParen => {
                self.parse_function(&name, first.col)?
            }
            Token::Ident(name) => match palette::named(&name) {
                Some(rgba) => ColorLiteral::from_bytes(rgba),
                None => {
                    return Err(ParseError::new(format!("unknown color name {name:?}"), first.col));
                }
            },
            Token::Eof => return Err(ParseError::new("empty color", first.col)),
            other => {
                return Err(ParseError::new(format!("unexpected {other:?}"), first.col));
            }
        };
        self.expect(Token::Eof, "end of input")?;
        Ok(color)
    }

    fn parse_function(&mut self, name: &str, col: usize) -> Result<ColorLiteral, ParseError> {
        let arity = match name.to_ascii_lowercase().as_str() {
            "rgb" => 3,
            "rgba" => 4,
            _ => return Err(ParseError::new(format!("unknown color function {name:?}"), col)),
        };
        self.expect(Token::LParen, "`(`")?;

        let mut comps = [0.0_f32, 0.0, 0.0, 1.0];
        for (i, slot) in comps.iter_mut().take(arity).enumerate() {
            if i > 0 {
                self.expect(Token::Comma, "`,`")?;
            }
            let tok = self.bump();
            match tok.token {
                Token::Number(v) if (0.0..=1.0).contains(&v) => *slot = v,
                Token::Number(v) => {
                    return Err(ParseError::new(
                        format!("component {v} is outside [0, 1]"),
                        tok.col,
                    ));
                }
                other => {
                    return Err(ParseError::new(format!("expected number, got {other:?}"), tok.col));
                }
            }
        }
        self.expect(Token::RParen, "`)`")?;

        let [r, g, b, a] = comps;
        Ok(ColorLiteral { r, g, b, a })
    }
}

fn hex_bytes(digits: &str, col: usize) -> Result<[u8; 4], ParseError> {
    let nibbles: Vec<u8> = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()
        .ok_or_else(|| ParseError::new(format!("invalid hex digits {digits:?}"), col))?;
    let byte = |i: usize| nibbles[2 * i] << 4 | nibbles[2 * i + 1];
    let short = |i: usize| nibbles[i] * 0x11;

    match nibbles.len() {
        3 => Ok([short(0), short(1), short(2), 0xff]),
        4 => Ok([short(0), short(1), short(2), short(3)]),
        6 => Ok([byte(0), byte(1), byte(2), 0xff]),
        8 => Ok([byte(0), byte(1), byte(2), byte(3)]),
        n => Err(ParseError::new(
            format!("color literal must have 3, 4, 6 or 8 hex digits, got {n}"),
            col,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(src: &str) -> ColorLiteral { parse_color(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_color(src).unwrap_err() }

    #[test]
    fn hex_six_digits() {
        assert_eq!(ok("#ffff00"), ColorLiteral { r: 1.0, g: 1.0, b: 0.0, a: 1.0 });
    }

    #[test]
    fn hex_eight_digits_carries_alpha() {
        assert_eq!(ok("#0000ff00").a, 0.0);
    }

    #[test]
    fn hex_uppercase() {
        assert_eq!(ok("#FF0000"), ok("#ff0000"));
    }

    #[test]
    fn hex_shorthand_expands() {
        assert_eq!(ok("#f0a"), ok("#ff00aa"));
        assert_eq!(ok("#f0a8"), ok("#ff00aa88"));
    }

    #[test]
    fn named_color() {
        assert_eq!(ok("  Blue "), ColorLiteral { r: 0.0, g: 0.0, b: 1.0, a: 1.0 });
    }

    #[test]
    fn rgb_function_keeps_reals() {
        let c = ok("rgb(0.25, 0.5, 0.125)");
        assert_eq!((c.r, c.g, c.b, c.a), (0.25, 0.5, 0.125, 1.0));
    }

    #[test]
    fn rgba_function() {
        assert_eq!(ok("RGBA(1, 0, 0, 0.5)").a, 0.5);
    }

    #[test] fn err_empty() { assert_eq!(err("   ").message, "empty color"); }
    #[test] fn err_five_digits() { err("#12345"); }
    #[test] fn err_non_hex() { assert_eq!(err("#ggg").col, 1); }
    #[test] fn err_unknown_name() { err("chartreuse"); }
    #[test] fn err_trailing_input() { err("red blue"); }
    #[test] fn err_out_of_range() { assert_eq!(err("rgb(1.5, 0, 0)").col, 5); }
    #[test] fn err_wrong_arity() { err("rgb(1, 0)"); }
    #[test] fn err_unknown_function() { err("hsl(0, 1, 1)"); }
}
