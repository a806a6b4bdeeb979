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

//! Lexer module for RetroBAS.
//!
//! This module tokenizes line-numbered BASIC source code into a stream of
//! tokens. It handles:
//! - Optional leading line numbers (`10 PRINT ...`)
//! - Keywords (case-insensitive) and identifiers with `$` suffixes
//! - Integer and floating-point literals
//! - String literals (no escape sequences)
//! - `REM` comments, whose body becomes the token text
//! - Single- and two-character operators (`<=`, `>=`, `<>`)
//!
//! The scanner is total: it never fails and never gets stuck. Unrecognized
//! characters come back as `ILLEGAL` tokens and scanning continues.

mod tokens;

pub use tokens::{Token, TokenKind};

use crate::error::Span;

/// The lexer state for tokenizing source code.
pub struct Lexer<'src> {
    /// The source code being tokenized.
    source: &'src str,
    /// Current byte position in the source.
    position: usize,
    /// Current line number (1-indexed).
    line: usize,
    /// Current column number (1-indexed).
    column: usize,
    /// Whether we're at the start of a line.
    at_line_start: bool,
    /// Whether the current line already produced its line number token.
    line_number_read: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            at_line_start: true,
            line_number_read: false,
        }
    }

    /// Get the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the current line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the current column number.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Check if we've reached the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Peek at the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Peek at the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.position..].chars();
        chars.next();
        chars.next()
    }

    /// Advance to the next character and return it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Create a span from start position to current position.
    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.position)
    }

    /// Get the next token from the source.
    ///
    /// Total function: every call returns a token and makes forward
    /// progress, and once the end of input is reached every further call
    /// keeps returning an `EOF` token.
    pub fn next_token(&mut self) -> (Token<'src>, Span) {
        self.skip_whitespace();

        let start = self.position;

        // Newlines reset the line structure for the *next* call.
        if self.peek() == Some('\n') {
            self.advance();
            self.at_line_start = true;
            self.line_number_read = false;
            let text = &self.source[start..self.position];
            return (Token::new(TokenKind::Newline, text), self.span_from(start));
        }

        // A digit run at the very start of a line is its line number label.
        // Anything else means the line has no label.
        if self.at_line_start && !self.line_number_read {
            if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return self.scan_line_number();
            }
            self.at_line_start = false;
        }

        match self.peek() {
            None => (Token::new(TokenKind::Eof, ""), self.span_from(start)),
            Some('"') => self.scan_string(),
            Some(c) if c.is_ascii_digit() || c == '.' => self.scan_number(),
            Some(c) if is_identifier_start(c) => self.scan_identifier(),
            Some(c) => self.scan_operator_or_symbol(c),
        }
    }

    /// Skip horizontal whitespace (spaces, tabs, carriage returns).
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c == ' ' || c == '\t' || c == '\r' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scan a leading line number label (a maximal digit run).
    fn scan_line_number(&mut self) -> (Token<'src>, Span) {
        let start = self.position;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        self.line_number_read = true;
        self.at_line_start = false;
        let text = &self.source[start..self.position];
        (Token::new(TokenKind::LineNo, text), self.span_from(start))
    }

    /// Scan a string literal.
    ///
    /// The token text is the interior without the quotes, with no escape
    /// processing. An unterminated string yields the partial interior.
    fn scan_string(&mut self) -> (Token<'src>, Span) {
        let open = self.position;
        self.advance(); // consume opening "

        let start = self.position;
        while self.peek().is_some_and(|c| c != '"') {
            self.advance();
        }
        let text = &self.source[start..self.position];

        if self.peek() == Some('"') {
            self.advance(); // consume closing "
        }

        (Token::new(TokenKind::String, text), self.span_from(open))
    }

    /// Scan a number literal.
    ///
    /// Accepts at most one decimal point; a second `.` terminates the scan.
    /// A literal containing a `.` is a FLOAT, otherwise an INTEGER. A bare
    /// leading `.` is legal and produces a FLOAT.
    fn scan_number(&mut self) -> (Token<'src>, Span) {
        let start = self.position;
        let mut kind = TokenKind::Integer;

        loop {
            match self.peek() {
                Some(c) if c.is_ascii_digit() => {
                    self.advance();
                }
                Some('.') if kind == TokenKind::Integer => {
                    kind = TokenKind::Float;
                    self.advance();
                }
                _ => break,
            }
        }

        let text = &self.source[start..self.position];
        (Token::new(kind, text), self.span_from(start))
    }

    /// Scan an identifier or keyword.
    ///
    /// Keyword matching is case-insensitive but the token text keeps the
    /// original spelling. `REM` swallows the rest of the line as its text.
    fn scan_identifier(&mut self) -> (Token<'src>, Span) {
        let start = self.position;
        while self.peek().is_some_and(is_identifier_char) {
            self.advance();
        }
        let text = &self.source[start..self.position];
        let kind = TokenKind::lookup_identifier(text);

        if kind == TokenKind::Rem {
            self.skip_whitespace();
            return self.scan_rem_comment(start);
        }

        (Token::new(kind, text), self.span_from(start))
    }

    /// Scan the body of a `REM` comment: everything up to the next newline
    /// or end of input, trimmed. The newline itself stays in the stream.
    fn scan_rem_comment(&mut self, keyword_start: usize) -> (Token<'src>, Span) {
        let start = self.position;
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
        let text = self.source[start..self.position].trim();
        (
            Token::new(TokenKind::Rem, text),
            self.span_from(keyword_start),
        )
    }

    /// Scan an operator or symbol.
    ///
    /// For `<` and `>` a two-character lookahead tries `<=`, `>=` and `<>`
    /// first; any other pair falls back to the single character. Characters
    /// not in the operator table come back as ILLEGAL tokens, consuming the
    /// character so scanning always moves forward.
    fn scan_operator_or_symbol(&mut self, c: char) -> (Token<'src>, Span) {
        let start = self.position;

        if c == '<' || c == '>' {
            if let Some(next) = self.peek_next() {
                let end = start + c.len_utf8() + next.len_utf8();
                if let Some(kind) = TokenKind::lookup_operator(&self.source[start..end]) {
                    self.advance();
                    self.advance();
                    let text = &self.source[start..self.position];
                    return (Token::new(kind, text), self.span_from(start));
                }
            }
        }

        self.advance();
        let text = &self.source[start..self.position];
        match TokenKind::lookup_operator(text) {
            Some(kind) => (Token::new(kind, text), self.span_from(start)),
            None => (Token::new(TokenKind::Illegal, text), self.span_from(start)),
        }
    }
}

/// Check if a character can start an identifier.
fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Check if a character can continue an identifier. `$` may appear anywhere,
/// used as the string-variable suffix convention.
fn is_identifier_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_' || c == '$'
}

/// Tokenize source code into a vector of tokens with spans.
///
/// The vector always ends with the EOF token, so the stream shape is the
/// same as pulling from [`Lexer::next_token`] by hand.
pub fn tokenize(source: &str) -> Vec<(Token<'_>, Span)> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let (token, span) = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push((token, span));
        if done {
            break;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pull tokens for `input` and compare (kind, text) pairs.
    fn check(input: &str, expected: &[(TokenKind, &str)]) {
        let mut lexer = Lexer::new(input);
        for (i, (kind, text)) in expected.iter().enumerate() {
            let (token, _) = lexer.next_token();
            assert_eq!(
                token.kind, *kind,
                "input {:?}: token {} kind mismatch (text {:?})",
                input, i, token.text
            );
            assert_eq!(
                token.text, *text,
                "input {:?}: token {} text mismatch",
                input, i
            );
        }
    }

    #[test]
    fn test_empty_input() {
        check("", &[(TokenKind::Eof, "")]);
    }

    #[test]
    fn test_simple_print_statement() {
        check(
            r#"10 PRINT "Hello World""#,
            &[
                (TokenKind::LineNo, "10"),
                (TokenKind::Print, "PRINT"),
                (TokenKind::String, "Hello World"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_variable_assignment() {
        check(
            "20 LET answer = 42",
            &[
                (TokenKind::LineNo, "20"),
                (TokenKind::Let, "LET"),
                (TokenKind::Ident, "answer"),
                (TokenKind::Assign, "="),
                (TokenKind::Integer, "42"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_mathematical_operations() {
        check(
            "30 LET result = (5 + 3.14) * 2",
            &[
                (TokenKind::LineNo, "30"),
                (TokenKind::Let, "LET"),
                (TokenKind::Ident, "result"),
                (TokenKind::Assign, "="),
                (TokenKind::LeftParen, "("),
                (TokenKind::Integer, "5"),
                (TokenKind::Plus, "+"),
                (TokenKind::Float, "3.14"),
                (TokenKind::RightParen, ")"),
                (TokenKind::Asterisk, "*"),
                (TokenKind::Integer, "2"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_conditional_statement() {
        check(
            "40 IF x <= 10 THEN 50",
            &[
                (TokenKind::LineNo, "40"),
                (TokenKind::If, "IF"),
                (TokenKind::Ident, "x"),
                (TokenKind::LessEqual, "<="),
                (TokenKind::Integer, "10"),
                (TokenKind::Then, "THEN"),
                (TokenKind::Integer, "50"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_string_variable() {
        check(
            r#"50 LET name$ = "Alice""#,
            &[
                (TokenKind::LineNo, "50"),
                (TokenKind::Let, "LET"),
                (TokenKind::Ident, "name$"),
                (TokenKind::Assign, "="),
                (TokenKind::String, "Alice"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_multiple_operators() {
        check(
            "60 IF a <> b AND c >= d OR e < f THEN 100",
            &[
                (TokenKind::LineNo, "60"),
                (TokenKind::If, "IF"),
                (TokenKind::Ident, "a"),
                (TokenKind::NotEqual, "<>"),
                (TokenKind::Ident, "b"),
                (TokenKind::And, "AND"),
                (TokenKind::Ident, "c"),
                (TokenKind::GreaterEqual, ">="),
                (TokenKind::Ident, "d"),
                (TokenKind::Or, "OR"),
                (TokenKind::Ident, "e"),
                (TokenKind::Less, "<"),
                (TokenKind::Ident, "f"),
                (TokenKind::Then, "THEN"),
                (TokenKind::Integer, "100"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_comment_line() {
        check(
            "100 REM This is a comment",
            &[
                (TokenKind::LineNo, "100"),
                (TokenKind::Rem, "This is a comment"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_multiple_lines() {
        check(
            "10 PRINT \"Hello\"\n20 GOTO 10\n30 END",
            &[
                (TokenKind::LineNo, "10"),
                (TokenKind::Print, "PRINT"),
                (TokenKind::String, "Hello"),
                (TokenKind::Newline, "\n"),
                (TokenKind::LineNo, "20"),
                (TokenKind::Goto, "GOTO"),
                (TokenKind::Integer, "10"),
                (TokenKind::Newline, "\n"),
                (TokenKind::LineNo, "30"),
                (TokenKind::End, "END"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_illegal_character() {
        check(
            "110 LET x = @5",
            &[
                (TokenKind::LineNo, "110"),
                (TokenKind::Let, "LET"),
                (TokenKind::Ident, "x"),
                (TokenKind::Assign, "="),
                (TokenKind::Illegal, "@"),
                (TokenKind::Integer, "5"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_unicode_string() {
        check(
            r#"70 PRINT "こんにちは世界""#,
            &[
                (TokenKind::LineNo, "70"),
                (TokenKind::Print, "PRINT"),
                (TokenKind::String, "こんにちは世界"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_case_insensitive_keyword() {
        check(
            r#"90 pRiNt "Case Test""#,
            &[
                (TokenKind::LineNo, "90"),
                (TokenKind::Print, "pRiNt"),
                (TokenKind::String, "Case Test"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_line_without_number() {
        check(
            r#"PRINT "Emergency!""#,
            &[
                (TokenKind::Print, "PRINT"),
                (TokenKind::String, "Emergency!"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut lexer = Lexer::new("END");
        let (token, _) = lexer.next_token();
        assert_eq!(token.kind, TokenKind::End);
        for _ in 0..3 {
            let (token, _) = lexer.next_token();
            assert_eq!(token.kind, TokenKind::Eof);
            assert_eq!(token.text, "");
        }
    }

    #[test]
    fn test_digit_run_mid_line_is_integer() {
        check(
            "10 20 30",
            &[
                (TokenKind::LineNo, "10"),
                (TokenKind::Integer, "20"),
                (TokenKind::Integer, "30"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_line_number_after_leading_whitespace() {
        check(
            "   10 END",
            &[
                (TokenKind::LineNo, "10"),
                (TokenKind::End, "END"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_rem_without_body() {
        check("REM", &[(TokenKind::Rem, ""), (TokenKind::Eof, "")]);
    }

    #[test]
    fn test_rem_keeps_newline_in_stream() {
        check(
            "10 REM note\n20 END",
            &[
                (TokenKind::LineNo, "10"),
                (TokenKind::Rem, "note"),
                (TokenKind::Newline, "\n"),
                (TokenKind::LineNo, "20"),
                (TokenKind::End, "END"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_rem_trims_trailing_whitespace() {
        check(
            "REM   padded comment   ",
            &[(TokenKind::Rem, "padded comment"), (TokenKind::Eof, "")],
        );
    }

    #[test]
    fn test_unterminated_string() {
        check(
            r#"PRINT "oops"#,
            &[
                (TokenKind::Print, "PRINT"),
                (TokenKind::String, "oops"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_second_decimal_point_ends_number() {
        check(
            "LET x = 1.2.3",
            &[
                (TokenKind::Let, "LET"),
                (TokenKind::Ident, "x"),
                (TokenKind::Assign, "="),
                (TokenKind::Float, "1.2"),
                (TokenKind::Float, ".3"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_leading_decimal_point() {
        check(
            "LET x = .5",
            &[
                (TokenKind::Let, "LET"),
                (TokenKind::Ident, "x"),
                (TokenKind::Assign, "="),
                (TokenKind::Float, ".5"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn test_span_tracking() {
        let mut lexer = Lexer::new("foo bar");
        let (_, span) = lexer.next_token();
        assert_eq!(span.start, 0);
        assert_eq!(span.end, 3);
        let (_, span) = lexer.next_token();
        assert_eq!(span.start, 4);
        assert_eq!(span.end, 7);
    }

    #[test]
    fn test_string_span_covers_quotes() {
        let mut lexer = Lexer::new(r#""ab""#);
        let (token, span) = lexer.next_token();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text, "ab");
        assert_eq!(span.start, 0);
        assert_eq!(span.end, 4);
    }

    #[test]
    fn test_line_and_column_tracking() {
        let mut lexer = Lexer::new("10 END\n20 END");
        assert_eq!(lexer.line(), 1);
        while lexer.next_token().0.kind != TokenKind::Newline {}
        assert_eq!(lexer.line(), 2);
        assert_eq!(lexer.column(), 1);
    }

    #[test]
    fn test_tokenize_ends_with_eof() {
        let tokens = tokenize("10 END");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].0.kind, TokenKind::LineNo);
        assert_eq!(tokens[1].0.kind, TokenKind::End);
        assert_eq!(tokens[2].0.kind, TokenKind::Eof);
    }

    #[test]
    fn test_tokenize_empty_source() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0.kind, TokenKind::Eof);
    }
}
