// RetroBAS - A tokenizer for line-numbered BASIC dialects
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! RetroBAS Tokenizer Library
//!
//! This library turns line-numbered BASIC source code into a flat stream of
//! classified tokens for a downstream parser.
//!
//! # Modules
//!
//! - [`error`] - Spans, source locations and diagnostic rendering
//! - [`lexer`] - Tokenization of source code
//!
//! The scanner is total: it never fails. Malformed input degrades to either
//! a partial-but-valid token (an unterminated string keeps its interior) or
//! an `ILLEGAL` token carrying the single offending character, and scanning
//! continues. Rejecting `ILLEGAL` tokens is the consumer's job.
//!
//! # Example
//!
//! ```
//! use retrobas::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("10 PRINT \"HELLO\"");
//!
//! let (token, _span) = lexer.next_token();
//! assert_eq!(token.kind, TokenKind::LineNo);
//! assert_eq!(token.text, "10");
//!
//! let (token, _span) = lexer.next_token();
//! assert_eq!(token.kind, TokenKind::Print);
//! ```

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{format_illegal, format_illegal_tokens, Error, SourceLocation, Span};
pub use lexer::{tokenize, Lexer, Token, TokenKind};

/// The version of the RetroBAS tokenizer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the tool.
pub const NAME: &str = "RetroBAS";

/// Render the token stream of `source` as a human-readable dump.
///
/// One token per line in its [`Token`] display form, ending with the EOF
/// token. This is what the CLI prints and what snapshot tests pin down.
///
/// # Example
///
/// ```
/// let dump = retrobas::dump_tokens("10 END");
/// assert_eq!(
///     dump,
///     "Token{Type: LINENO, Value: \"10\"}\n\
///      Token{Type: END, Value: \"END\"}\n\
///      Token{Type: EOF}\n"
/// );
/// ```
pub fn dump_tokens(source: &str) -> String {
    let mut output = String::new();
    for (token, _) in tokenize(source) {
        output.push_str(&token.to_string());
        output.push('\n');
    }
    output
}
