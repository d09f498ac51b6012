//! Lexer and parser for **color literals** typed at the Swatch Studio prompt.
//!
//! This crate is intentionally dependency-free so scripts and editor tooling
//! can validate color input without linking the model or the terminal front end.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`palette`] | `PALETTE`, `named` |
//! | [`parser`] | `parse_color` entry point, `ColorLiteral` |
//!
//! # Quick start
//!
//! ```rust
//! use swatch_notation::parse_color;
//!
//! let c = parse_color("#ffff00").unwrap();
//! assert_eq!((c.r, c.g, c.b, c.a), (1.0, 1.0, 0.0, 1.0));
//!
//! let half = parse_color("rgba(1, 0, 0, 0.5)").unwrap();
//! assert_eq!(half.a, 0.5);
//! ```

pub mod error;
pub mod lexer;
pub mod palette;
pub mod parser;

pub use error::ParseError;
pub use palette::{named, PALETTE};
pub use parser::{parse_color, ColorLiteral};
