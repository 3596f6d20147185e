//! Terminal output for the `theme-bridge` binary.
//!
//! Report lines go to stdout; warnings and errors go to stderr. Each line is
//! built by a pure `*_line` method so formatting is testable without a
//! terminal.

use crossterm::style::{Color, Stylize};

use crate::diagnostics::HealthStatus;

const INDENT_1: &str = "  ";
const GLYPH_SECTION_BULLET: &str = "•";
const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";

const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
const COLOR_SECTION_TITLE: Color = Color::Cyan;
const COLOR_FIELD_KEY: Color = Color::DarkGrey;
const COLOR_FIELD_VALUE: Color = Color::White;
const COLOR_DETAIL: Color = Color::DarkGrey;
const COLOR_WARNING: Color = Color::Yellow;
const COLOR_ERROR: Color = Color::Red;
const COLOR_PASS: Color = Color::Green;
const COLOR_LOADING: Color = Color::DarkYellow;

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn section(&self, title: &str) {
        println!("{}", self.section_line(title));
    }

    pub fn field(&self, key: &str, value: &str) {
        println!("{}", self.field_line(key, value));
    }

    pub fn detail(&self, text: &str) {
        println!("{}", self.detail_line(text));
    }

    /// One health-check row: `[pass] name: message`.
    pub fn check(&self, status: HealthStatus, name: &str, message: &str) {
        println!("{}", self.check_line(status, name, message));
    }

    pub fn warn(&self, msg: &str) {
        eprintln!("{}", self.warn_line(msg));
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.error_line(msg));
    }

    pub fn section_line(&self, title: &str) -> String {
        if self.color {
            format!(
                "{} {}",
                GLYPH_SECTION_BULLET.with(COLOR_SECTION_BULLET),
                title.with(COLOR_SECTION_TITLE).bold()
            )
        } else {
            format!("{title}:")
        }
    }

    pub fn field_line(&self, key: &str, value: &str) -> String {
        if self.color {
            format!(
                "{INDENT_1}{} {}",
                format!("{key}:").with(COLOR_FIELD_KEY),
                value.with(COLOR_FIELD_VALUE)
            )
        } else {
            format!("{INDENT_1}{key}: {value}")
        }
    }

    pub fn detail_line(&self, text: &str) -> String {
        if self.color {
            format!("{INDENT_1}{}", text.with(COLOR_DETAIL))
        } else {
            format!("{INDENT_1}{text}")
        }
    }

    pub fn check_line(&self, status: HealthStatus, name: &str, message: &str) -> String {
        let label = format!("[{status}]");
        if self.color {
            let tint = match status {
                HealthStatus::Pass => COLOR_PASS,
                HealthStatus::Fail => COLOR_ERROR,
                HealthStatus::Loading => COLOR_LOADING,
            };
            format!(
                "{INDENT_1}{} {}: {message}",
                label.with(tint).bold(),
                name.with(COLOR_FIELD_VALUE)
            )
        } else {
            format!("{INDENT_1}{label} {name}: {message}")
        }
    }

    pub fn warn_line(&self, msg: &str) -> String {
        if self.color {
            format!("{} {msg}", LABEL_WARNING.with(COLOR_WARNING).bold())
        } else {
            format!("{LABEL_WARNING} {msg}")
        }
    }

    pub fn error_line(&self, msg: &str) -> String {
        if self.color {
            format!("{} {msg}", LABEL_ERROR.with(COLOR_ERROR).bold())
        } else {
            format!("{LABEL_ERROR} {msg}")
        }
    }
}
