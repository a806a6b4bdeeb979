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

//! Spans, source locations and diagnostic rendering.
//!
//! The scanner itself has no failure mode: malformed input degrades to
//! ILLEGAL tokens in the stream. This module provides what a consumer needs
//! to reject those tokens with a readable report, plus the I/O error type
//! used by the token dump tool.

use std::ops::Range;
use std::path::PathBuf;
use thiserror::Error;

use crate::lexer::{Token, TokenKind};

/// A source span representing a range in the source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span from a range.
    pub fn from_range(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::from_range(range)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Errors the token dump tool can run into around the scanner.
#[derive(Debug, Error)]
pub enum Error {
    /// A source file could not be read.
    #[error("cannot read {path}: {source}")]
    ReadSource {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The token dump could not be written.
    #[error("cannot write {path}: {source}")]
    WriteOutput {
        /// The file that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Source location with line and column information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// The content of the line.
    pub line_content: String,
}

impl SourceLocation {
    /// Calculate line and column from a byte offset in source code.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];

        let line = before.chars().filter(|&c| c == '\n').count() + 1;

        let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[last_newline..].chars().count() + 1;

        // Extract the line content
        let line_start = last_newline;
        let line_end = source[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(source.len());
        let line_content = source[line_start..line_end].to_string();

        Self {
            line,
            column,
            line_content,
        }
    }
}

/// Format a report for a single ILLEGAL token with source context.
pub fn format_illegal(
    token: &Token<'_>,
    span: &Span,
    source: &str,
    filename: Option<&str>,
) -> String {
    let loc = SourceLocation::from_offset(source, span.start);
    let filename = filename.unwrap_or("<input>");

    let mut output = String::new();

    // Error header
    output.push_str(&format!("error: illegal character '{}'\n", token.text));

    // Location
    output.push_str(&format!("  --> {}:{}:{}\n", filename, loc.line, loc.column));

    // Source context
    let line_num_width = loc.line.to_string().len();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{:>width$} | {}\n",
        loc.line,
        loc.line_content,
        width = line_num_width
    ));

    // Underline the offending character
    let underline_start = loc.column - 1;
    output.push_str(&format!(
        "{:>width$} | {:>start$}^\n",
        "",
        "",
        width = line_num_width,
        start = underline_start
    ));

    output
}

/// Format a report for every ILLEGAL token in a stream.
///
/// Returns an empty string when the stream is clean.
pub fn format_illegal_tokens(
    tokens: &[(Token<'_>, Span)],
    source: &str,
    filename: Option<&str>,
) -> String {
    let mut output = String::new();
    for (token, span) in tokens {
        if token.kind == TokenKind::Illegal {
            output.push_str(&format_illegal(token, span, source, filename));
        }
    }
    output
}
