//! The interactive loop.
//!
//! The shell holds the session state and re-splits whenever something that
//! shapes the result changes (new text, new size, a filter toggle). Copying
//! always sends the current piece at the requested position, never a stale
//! one, because the piece list is replaced wholesale on every split.

use anyhow::Result;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use strips::{Piece, SplitRequest};

use crate::cli::args::Args;
use crate::cli::clipboard::Clipboard;
use crate::cli::render;

/// A parsed shell command. Piece positions are 1-based, as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Copy piece N to the clipboard. A bare number works too.
    Copy(usize),
    /// Print piece N.
    Show(usize),
    /// Print all pieces.
    List,
    /// Read new text, terminated by a lone `.` line.
    Text,
    /// Change the piece size and re-split.
    Size(usize),
    /// Toggle whitespace removal and re-split.
    ToggleWhitespace,
    /// Toggle newline removal and re-split.
    ToggleNewlines,
    /// Show the command list.
    Help,
    /// Leave the shell.
    Quit,
    /// Anything unrecognized; carries the offending line.
    Unknown(String),
}

impl Command {
    /// Parse a line. Returns `None` for blank input.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let head = words.next()?;
        let arg = words.next();

        // A trailing third word makes nothing valid.
        if words.next().is_some() {
            return Some(Self::Unknown(line.to_owned()));
        }

        let parsed = match (head, arg) {
            (number, None) if number.parse::<usize>().is_ok() => {
                Self::Copy(number.parse().unwrap_or(0))
            }
            ("copy" | "c", Some(n)) => match n.parse() {
                Ok(n) => Self::Copy(n),
                Err(_) => Self::Unknown(line.to_owned()),
            },
            ("show", Some(n)) => match n.parse() {
                Ok(n) => Self::Show(n),
                Err(_) => Self::Unknown(line.to_owned()),
            },
            ("size", Some(n)) => match n.parse() {
                Ok(n) => Self::Size(n),
                Err(_) => Self::Unknown(line.to_owned()),
            },
            ("list" | "ls", None) => Self::List,
            ("text", None) => Self::Text,
            ("ws", None) => Self::ToggleWhitespace,
            ("nl", None) => Self::ToggleNewlines,
            ("help" | "?", None) => Self::Help,
            ("quit" | "q" | "exit", None) => Self::Quit,
            _ => Self::Unknown(line.to_owned()),
        };
        Some(parsed)
    }
}

/// The interactive session.
pub struct Shell {
    text: String,
    size: usize,
    strip_whitespace: bool,
    strip_newlines: bool,
    pieces: Vec<Piece>,
    clipboard: Clipboard,
    editor: Reedline,
    prompt: DefaultPrompt,
}

impl Shell {
    /// Build a shell from the command-line arguments and initial text.
    pub fn new(text: String, args: &Args) -> Self {
        Self {
            text,
            size: args.size,
            strip_whitespace: args.strip_whitespace,
            strip_newlines: args.strip_newlines,
            pieces: Vec::new(),
            clipboard: Clipboard::new(),
            editor: Reedline::create(),
            prompt: DefaultPrompt::new(
                DefaultPromptSegment::Basic("strips".to_owned()),
                DefaultPromptSegment::Empty,
            ),
        }
    }

    /// Run the loop until `quit` or end of input.
    pub fn run(mut self) -> Result<()> {
        println!(
            "{}",
            "strips — split text into paste-sized pieces".purple().bold()
        );
        println!("{}", "type `help` for commands, `quit` to leave".dimmed());

        if self.text.is_empty() {
            println!("{}", "no text yet; enter some with `text`".dimmed());
        } else {
            self.resplit();
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                Signal::Success(buffer) => {
                    let Some(command) = Command::parse(&buffer) else {
                        continue;
                    };
                    if command == Command::Quit {
                        break;
                    }
                    self.handle(command)?;
                }
                Signal::CtrlC | Signal::CtrlD => break,
            }
        }
        Ok(())
    }

    fn handle(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Copy(n) => self.copy(n),
            Command::Show(n) => match self.piece_at(n) {
                Some(piece) => render::piece(piece),
                None => render::error(&format!("no piece #{n}")),
            },
            Command::List => render::pieces(&self.pieces),
            Command::Text => {
                let text = self.read_text()?;
                self.text = text;
                self.resplit();
            }
            Command::Size(n) => {
                let previous = self.size;
                self.size = n;
                if !self.resplit() {
                    self.size = previous;
                }
            }
            Command::ToggleWhitespace => {
                self.strip_whitespace = !self.strip_whitespace;
                println!(
                    "whitespace removal: {}",
                    if self.strip_whitespace { "on" } else { "off" }
                );
                self.resplit();
            }
            Command::ToggleNewlines => {
                self.strip_newlines = !self.strip_newlines;
                println!(
                    "newline removal: {}",
                    if self.strip_newlines { "on" } else { "off" }
                );
                self.resplit();
            }
            Command::Help => print_help(),
            Command::Quit => {}
            Command::Unknown(line) => {
                render::error(&format!("unknown command: {line} (try `help`)"));
            }
        }
        Ok(())
    }

    fn piece_at(&self, position: usize) -> Option<&Piece> {
        position
            .checked_sub(1)
            .and_then(|index| self.pieces.get(index))
    }

    fn copy(&mut self, position: usize) {
        let Some(piece) = position
            .checked_sub(1)
            .and_then(|index| self.pieces.get(index))
        else {
            render::error(&format!("no piece #{position}"));
            return;
        };

        // Clipboard failure is best-effort: no notice, no error.
        if self.clipboard.write(&piece.text) {
            render::transient_notice("Copied!");
        }
    }

    /// Split the current text with the current settings, replacing the held
    /// pieces. Returns whether the split succeeded; on failure the previous
    /// pieces are kept.
    fn resplit(&mut self) -> bool {
        let request = SplitRequest::new(&self.text, self.size)
            .strip_whitespace(self.strip_whitespace)
            .strip_newlines(self.strip_newlines);
        match strips::split(&request) {
            Ok(pieces) => {
                self.pieces = pieces;
                render::summary(&self.pieces, self.size);
                render::pieces(&self.pieces);
                true
            }
            Err(err) => {
                render::error(&err.to_string());
                false
            }
        }
    }

    /// Read multi-line text, terminated by a line containing only `.`.
    fn read_text(&mut self) -> Result<String> {
        println!("{}", "enter text; finish with a single `.` line".dimmed());
        let mut lines: Vec<String> = Vec::new();
        loop {
            match self.editor.read_line(&self.prompt)? {
                Signal::Success(line) => {
                    if line.trim() == "." {
                        break;
                    }
                    lines.push(line);
                }
                Signal::CtrlC | Signal::CtrlD => break,
            }
        }
        Ok(lines.join("\n"))
    }
}

fn print_help() {
    println!(
        "\
commands:
  N | copy N     copy piece N to the clipboard
  show N         print piece N
  list           print all pieces
  text           enter new text (finish with a lone `.`)
  size N         set the piece size and re-split
  ws             toggle whitespace removal and re-split
  nl             toggle newline removal and re-split
  help           this list
  quit           leave"
    );
}
