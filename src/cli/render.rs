//! Terminal output for pieces and notices.

use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use crossterm::{cursor, execute, terminal};
use strips::Piece;

/// How long a transient notice stays on screen.
const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Print every piece as a numbered block. Numbering starts at 1 to match
/// what the copy command expects.
pub fn pieces(pieces: &[Piece]) {
    if pieces.is_empty() {
        println!("{}", "no pieces (text is empty after filters)".dimmed());
        return;
    }

    for piece in pieces {
        let header = format!("#{} ({} chars)", piece.index + 1, piece.len());
        println!("{}", header.blue().bold());
        println!("{}", piece.text);
        println!();
    }
}

/// Print a single piece verbatim, with its header.
pub fn piece(piece: &Piece) {
    let header = format!("#{} ({} chars)", piece.index + 1, piece.len());
    println!("{}", header.blue().bold());
    println!("{}", piece.text);
}

/// One-line summary after a split.
pub fn summary(pieces: &[Piece], chunk_size: usize) {
    println!(
        "{}",
        format!("{} piece(s) at up to {chunk_size} chars", pieces.len()).cyan()
    );
}

/// Show a success notice, hold it for a moment, then erase it.
///
/// On a non-terminal stdout the notice is printed and left in place, since
/// there is no cursor to move.
pub fn transient_notice(message: &str) {
    let mut out = io::stdout();
    let _ = writeln!(out, "{}", message.green().bold());
    let _ = out.flush();

    if !out.is_terminal() {
        return;
    }

    thread::sleep(NOTICE_DURATION);
    let _ = execute!(
        out,
        cursor::MoveUp(1),
        terminal::Clear(terminal::ClearType::CurrentLine)
    );
}

/// Red error line.
pub fn error(message: &str) {
    println!("{}", message.red());
}
