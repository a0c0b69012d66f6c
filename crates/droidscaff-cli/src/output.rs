//! Status lines printed to stdout.
//!
//! Logs go to stderr through `tracing`; everything the operator is meant to
//! read during a session goes through [`OutputManager`].

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.decorate("\u{2713}", msg, Style::Success)) // ✓
    }

    /// Not suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(&self.decorate("\u{2717}", msg, Style::Error)) // ✗
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.decorate("\u{26a0}", msg, Style::Warning)) // ⚠
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.decorate("\u{2139}", msg, Style::Info)) // ℹ
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// `- item` list entry.
    pub fn item(&self, text: &str) -> io::Result<()> {
        self.print(&format!("- {text}"))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    fn decorate(&self, symbol: &str, msg: &str, style: Style) -> String {
        if self.resolved_format == OutputFormat::Plain {
            return msg.to_owned();
        }
        if self.no_color {
            return format!("{symbol} {msg}");
        }
        match style {
            Style::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Style::Error => format!("{} {}", symbol.red().bold(), msg.red()),
            Style::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
            Style::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
        }
    }
}

#[derive(Clone, Copy)]
enum Style {
    Success,
    Error,
    Warning,
    Info,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn plain_format_has_no_symbols() {
        let out = make_manager(false, false, OutputFormat::Plain);
        assert_eq!(out.decorate("\u{2713}", "done", Style::Success), "done");
        assert!(!out.supports_color());
    }

    #[test]
    fn human_without_color_keeps_symbol() {
        let out = make_manager(false, true, OutputFormat::Human);
        assert_eq!(out.decorate("\u{2713}", "done", Style::Success), "\u{2713} done");
    }

    #[test]
    fn human_with_color_reports_color() {
        let out = make_manager(false, false, OutputFormat::Human);
        assert!(out.supports_color());
        assert_eq!(out.resolved_format, OutputFormat::Human);
    }
}
