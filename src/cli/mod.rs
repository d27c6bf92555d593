//! The presentation shell: arguments, rendering, clipboard, and the REPL.
//!
//! Everything here is glue around the library core. The shell owns the
//! mutable session state (current text, current size, filter toggles, the
//! last-produced pieces) and rebuilds a fresh [`strips::SplitRequest`] from
//! that state on every split.

pub mod args;
pub mod clipboard;
pub mod render;
pub mod shell;
