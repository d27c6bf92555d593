//! Interactive shell for cutting text into paste-sized pieces.
//!
//! Reads text from a file or stdin, splits it with the strips library, and
//! either prints the numbered pieces (`--print`, or whenever stdin is piped)
//! or drops into a small REPL where pieces can be re-split, shown, and copied
//! to the system clipboard one at a time.

use std::fs;
use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use clap::Parser;

mod cli;

use cli::args::Args;
use cli::render;
use cli::shell::Shell;
use strips::SplitRequest;

fn main() -> Result<()> {
    let args = Args::parse();

    let stdin_piped = !io::stdin().is_terminal();
    let text = if let Some(path) = &args.file {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    } else if stdin_piped {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        String::new()
    };

    // Without a terminal on stdin there is nothing to be interactive with.
    if args.print || stdin_piped {
        let request = SplitRequest::new(&text, args.size)
            .strip_whitespace(args.strip_whitespace)
            .strip_newlines(args.strip_newlines);
        let pieces = strips::split(&request)?;
        render::pieces(&pieces);
        return Ok(());
    }

    Shell::new(text, &args).run()
}
