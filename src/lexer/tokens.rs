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

//! Token definitions for the RetroBAS language.

/// The kind of a token.
///
/// This is a closed set: every lexeme the scanner can produce is classified
/// as exactly one of these. `Boolean` and `Builtin` are reserved for later
/// pipeline stages and are never produced by the scanner itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special tokens
    /// An unrecognized character.
    Illegal,
    /// End of input.
    Eof,
    /// End of line.
    Newline,
    /// A leading line number label.
    LineNo,

    // Literals and identifiers
    /// Identifier (variable or function name, `$` suffix allowed).
    Ident,
    /// Integer literal.
    Integer,
    /// Floating-point literal.
    Float,
    /// String literal.
    String,
    /// Boolean literal (reserved, produced by later stages).
    Boolean,
    /// Built-in function name (reserved, produced by later stages).
    Builtin,

    // Keywords
    /// `END` - stop the program.
    End,
    /// `GOSUB` - jump to a subroutine.
    Gosub,
    /// `GOTO` - jump to a line number.
    Goto,
    /// `INPUT` - read user input.
    Input,
    /// `LET` - variable assignment.
    Let,
    /// `PRINT` - write output.
    Print,
    /// `REM` - comment; the token text is the comment body.
    Rem,
    /// `RETURN` - return from a subroutine.
    Return,
    /// `FOR` - loop start.
    For,
    /// `NEXT` - loop end.
    Next,
    /// `STEP` - loop increment.
    Step,
    /// `TO` - loop bound.
    To,
    /// `IF` - conditional statement.
    If,
    /// `THEN` - conditional branch.
    Then,
    /// `ELSE` - else branch.
    Else,
    /// `AND` - logical AND.
    And,
    /// `OR` - logical OR.
    Or,
    /// `XOR` - logical XOR.
    Xor,
    /// `DEF` - function definition.
    Def,
    /// `DIM` - array declaration.
    Dim,
    /// `FN` - function reference.
    Fn,
    /// `READ` - read from a data block.
    Read,
    /// `SWAP` - exchange two variables.
    Swap,
    /// `DATA` - data block.
    Data,

    // Operators and symbols
    /// `=` - assignment or equality.
    Assign,
    /// `*` - multiplication.
    Asterisk,
    /// `,` - comma.
    Comma,
    /// `-` - subtraction.
    Minus,
    /// `%` - modulo.
    Mod,
    /// `+` - addition.
    Plus,
    /// `/` - division.
    Slash,
    /// `^` - exponentiation.
    Pow,
    /// `:` - statement separator.
    Colon,
    /// `;` - print separator.
    Semicolon,
    /// `(` - left parenthesis.
    LeftParen,
    /// `)` - right parenthesis.
    RightParen,
    /// `[` - left index bracket.
    LeftBracket,
    /// `]` - right index bracket.
    RightBracket,
    /// `>` - greater than.
    Greater,
    /// `>=` - greater or equal.
    GreaterEqual,
    /// `<` - less than.
    Less,
    /// `<=` - less or equal.
    LessEqual,
    /// `<>` - not equal.
    NotEqual,
}

impl TokenKind {
    /// Look up an identifier against the keyword table.
    ///
    /// Keyword matching is case-insensitive (`print`, `PRINT` and `pRiNt`
    /// are all the same keyword). Anything that is not a keyword is an
    /// [`TokenKind::Ident`].
    pub fn lookup_identifier(ident: &str) -> TokenKind {
        match ident.to_ascii_lowercase().as_str() {
            "and" => TokenKind::And,
            "data" => TokenKind::Data,
            "def" => TokenKind::Def,
            "dim" => TokenKind::Dim,
            "else" => TokenKind::Else,
            "end" => TokenKind::End,
            "fn" => TokenKind::Fn,
            "for" => TokenKind::For,
            "gosub" => TokenKind::Gosub,
            "goto" => TokenKind::Goto,
            "if" => TokenKind::If,
            "input" => TokenKind::Input,
            "let" => TokenKind::Let,
            "next" => TokenKind::Next,
            "or" => TokenKind::Or,
            "print" => TokenKind::Print,
            "read" => TokenKind::Read,
            "rem" => TokenKind::Rem,
            "return" => TokenKind::Return,
            "step" => TokenKind::Step,
            "swap" => TokenKind::Swap,
            "then" => TokenKind::Then,
            "to" => TokenKind::To,
            "xor" => TokenKind::Xor,
            _ => TokenKind::Ident,
        }
    }

    /// Look up a spelling against the operator/symbol table.
    ///
    /// Covers the thirteen single-character symbols plus the three
    /// two-character operators `<=`, `>=` and `<>`.
    pub fn lookup_operator(op: &str) -> Option<TokenKind> {
        let kind = match op {
            "=" => TokenKind::Assign,
            "*" => TokenKind::Asterisk,
            "," => TokenKind::Comma,
            "-" => TokenKind::Minus,
            "%" => TokenKind::Mod,
            "+" => TokenKind::Plus,
            "/" => TokenKind::Slash,
            "^" => TokenKind::Pow,
            ":" => TokenKind::Colon,
            ";" => TokenKind::Semicolon,
            "(" => TokenKind::LeftParen,
            ")" => TokenKind::RightParen,
            "[" => TokenKind::LeftBracket,
            "]" => TokenKind::RightBracket,
            ">" => TokenKind::Greater,
            ">=" => TokenKind::GreaterEqual,
            "<" => TokenKind::Less,
            "<=" => TokenKind::LessEqual,
            "<>" => TokenKind::NotEqual,
            _ => return None,
        };
        Some(kind)
    }

    /// Get the diagnostic tag for this kind.
    ///
    /// Named kinds use an upper-case tag, operators and symbols are tagged
    /// with their own spelling.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Newline => "NEWLINE",
            TokenKind::LineNo => "LINENO",
            TokenKind::Ident => "IDENT",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Builtin => "BUILTIN",
            TokenKind::End => "END",
            TokenKind::Gosub => "GOSUB",
            TokenKind::Goto => "GOTO",
            TokenKind::Input => "INPUT",
            TokenKind::Let => "LET",
            TokenKind::Print => "PRINT",
            TokenKind::Rem => "REM",
            TokenKind::Return => "RETURN",
            TokenKind::For => "FOR",
            TokenKind::Next => "NEXT",
            TokenKind::Step => "STEP",
            TokenKind::To => "TO",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Xor => "XOR",
            TokenKind::Def => "DEF",
            TokenKind::Dim => "DIM",
            TokenKind::Fn => "FN",
            TokenKind::Read => "READ",
            TokenKind::Swap => "SWAP",
            TokenKind::Data => "DATA",
            TokenKind::Assign => "=",
            TokenKind::Asterisk => "*",
            TokenKind::Comma => ",",
            TokenKind::Minus => "-",
            TokenKind::Mod => "%",
            TokenKind::Plus => "+",
            TokenKind::Slash => "/",
            TokenKind::Pow => "^",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::NotEqual => "<>",
        }
    }

    /// Check if this kind is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::End
                | TokenKind::Gosub
                | TokenKind::Goto
                | TokenKind::Input
                | TokenKind::Let
                | TokenKind::Print
                | TokenKind::Rem
                | TokenKind::Return
                | TokenKind::For
                | TokenKind::Next
                | TokenKind::Step
                | TokenKind::To
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Xor
                | TokenKind::Def
                | TokenKind::Dim
                | TokenKind::Fn
                | TokenKind::Read
                | TokenKind::Swap
                | TokenKind::Data
        )
    }

    /// Check if this kind is a relational operator.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::Greater
                | TokenKind::GreaterEqual
                | TokenKind::Less
                | TokenKind::LessEqual
                | TokenKind::NotEqual
        )
    }

    /// Check if this kind is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Integer | TokenKind::Float | TokenKind::String | TokenKind::Boolean
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A single token: a kind plus the lexeme (or derived display value).
///
/// The text borrows from the source the scanner was built over, so tokens
/// are plain copyable values with no allocation behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The classification of this token.
    pub kind: TokenKind,
    /// The literal text. For `Rem` this is the trimmed comment body, for
    /// `String` the interior without the quotes, for `Eof` the empty string.
    pub text: &'src str,
}

impl<'src> Token<'src> {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind, text }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Newline => write!(f, "Token{{Type: NEWLINE, Value: \\n}}"),
            TokenKind::Eof => write!(f, "Token{{Type: EOF}}"),
            _ => write!(f, "Token{{Type: {}, Value: {:?}}}", self.kind.tag(), self.text),
        }
    }
}
