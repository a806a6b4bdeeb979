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

//! RetroBAS Tokenizer CLI
//!
//! Dumps the token stream of line-numbered BASIC source files.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use retrobas::error::{format_illegal_tokens, Error};
use retrobas::lexer::{tokenize, TokenKind};

/// RetroBAS - A tokenizer for line-numbered BASIC dialects
#[derive(Parser, Debug)]
#[command(name = "retrobas")]
#[command(author = "RetroBAS Team")]
#[command(version)]
#[command(about = "A tokenizer for line-numbered BASIC dialects")]
#[command(long_about = r#"
RetroBAS scans source files written in a line-numbered BASIC dialect and
prints the resulting token stream, one token per line.

Unrecognized characters never abort the scan: they show up as ILLEGAL
tokens in the stream and are reported as diagnostics on stderr. The exit
code is 1 when any ILLEGAL token was produced.

Example usage:
  retrobas hello.bas
  retrobas game.bas utils.bas -o game.tokens
  retrobas hello.bas --quiet
"#)]
struct Cli {
    /// Source files to tokenize (.bas)
    #[arg(required = true)]
    source_files: Vec<PathBuf>,

    /// Output file for the token dump (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress the token dump, only report diagnostics
    #[arg(short, long, conflicts_with = "output")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        println!("RetroBAS Tokenizer v{}", retrobas::VERSION);
        println!("Source files:");
        for file in &cli.source_files {
            println!("  - {}", file.display());
        }
        println!();
    }

    // Read and concatenate source files
    let mut source = String::new();
    for path in &cli.source_files {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                if cli.verbose {
                    println!("Reading {}...", path.display());
                }
                source.push_str(&content);
                if !content.ends_with('\n') {
                    source.push('\n');
                }
            }
            Err(e) => {
                let err = Error::ReadSource {
                    path: path.clone(),
                    source: e,
                };
                eprintln!("Error: {}", err);
                return ExitCode::from(3);
            }
        }
    }

    // Get the primary filename for diagnostics
    let primary_filename = cli.source_files[0]
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<input>");

    let tokens = tokenize(&source);

    if cli.verbose {
        println!("Scanned {} tokens", tokens.len());
    }

    if !cli.quiet {
        let mut dump = String::new();
        for (token, _) in &tokens {
            dump.push_str(&token.to_string());
            dump.push('\n');
        }

        match &cli.output {
            Some(path) => {
                if let Err(e) = std::fs::write(path, &dump) {
                    let err = Error::WriteOutput {
                        path: path.clone(),
                        source: e,
                    };
                    eprintln!("Error: {}", err);
                    return ExitCode::from(3);
                }
                if cli.verbose {
                    println!("Wrote {}", path.display());
                }
            }
            None => print!("{}", dump),
        }
    }

    // An ILLEGAL token in the stream is the consumer's cue to reject the
    // input. This tool is such a consumer.
    let report = format_illegal_tokens(&tokens, &source, Some(primary_filename));
    if !report.is_empty() {
        eprint!("{}", report);
        let count = tokens
            .iter()
            .filter(|(t, _)| t.kind == TokenKind::Illegal)
            .count();
        eprintln!(
            "{} illegal token{} found",
            count,
            if count == 1 { "" } else { "s" }
        );
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
