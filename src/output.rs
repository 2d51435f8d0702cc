//! Terminal output formatting for the mjtile CLI.
//!
//! Status lines go to stderr in Cargo style (right-aligned coloured verb).
//! Stdout carries only tokens and positions so it can be piped.

use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is used only when stderr is a terminal. A quiet printer drops
/// status and warning lines; error lines always print.
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// e.g. "      Parsed 14 tokens from \"123m456p\""
    pub fn status(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.write_line(GREEN, verb, message);
        }
    }

    pub fn success(&self, verb: &str, message: &str) {
        self.status(verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.write_line(YELLOW, verb, message);
        }
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.write_line(RED, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Paths and file locations.
    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    /// Bold red for errors, bold yellow for warnings.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let color = if is_error { RED } else { YELLOW };
        self.paint(&format!("{BOLD}{color}"), label)
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn write_line(&self, color: &str, verb: &str, message: &str) {
        let verb = format!("{verb:>VERB_WIDTH$}");
        let verb = self.paint(&format!("{BOLD}{color}"), &verb);
        let _ = writeln!(io::stderr().lock(), "{verb} {message}");
    }
}

/// Pluralize a count: `plural(1, "tile", "tiles")` → "1 tile".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}
