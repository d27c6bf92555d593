//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Split text into fixed-size pieces for paste-limited inputs.
#[derive(Debug, Parser)]
#[command(name = "strips", version, about)]
pub struct Args {
    /// File to read text from. With no file, text is read from stdin when
    /// piped, otherwise the shell starts empty.
    pub file: Option<PathBuf>,

    /// Maximum characters per piece.
    #[arg(short, long, default_value_t = 4000)]
    pub size: usize,

    /// Remove all whitespace before splitting.
    #[arg(short = 'w', long)]
    pub strip_whitespace: bool,

    /// Remove newline characters before splitting.
    #[arg(short = 'n', long)]
    pub strip_newlines: bool,

    /// Print the pieces and exit instead of starting the shell.
    #[arg(short, long)]
    pub print: bool,
}
