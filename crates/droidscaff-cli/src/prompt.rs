//! Operator prompts.
//!
//! Every question a session asks goes through [`Prompter`]. Piped stdin
//! gets the line protocol of [`LinePrompter`]: one answer per line, `yes`
//! or `y` accepts a confirmation, menus take the item number. A terminal
//! gets `dialoguer` widgets when the `interactive` feature is on.

use std::io::{self, BufRead, IsTerminal, Write};

use tracing::debug;

use crate::error::{CliError, CliResult};

pub trait Prompter {
    /// Yes/no question. Anything but `yes`/`y` is a no.
    fn confirm(&mut self, prompt: &str) -> CliResult<bool>;

    /// Free text, trimmed.
    fn input(&mut self, prompt: &str) -> CliResult<String>;

    /// Numbered menu. `None` when the answer is not one of the items.
    fn choose(&mut self, prompt: &str, items: &[String]) -> CliResult<Option<usize>>;
}

/// Pick the prompter for this process's stdin.
pub fn stdin_prompter() -> Box<dyn Prompter> {
    #[cfg(feature = "interactive")]
    if io::stdin().is_terminal() && io::stderr().is_terminal() {
        debug!("Using terminal prompts");
        return Box::new(DialoguerPrompter::new());
    }

    debug!(tty = io::stdin().is_terminal(), "Using line prompts");
    Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
}

// ── line protocol ─────────────────────────────────────────────────────────────

pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn ask(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::Cancelled);
        }
        Ok(line.trim().to_owned())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn confirm(&mut self, prompt: &str) -> CliResult<bool> {
        let answer = self.ask(&format!("{prompt} (yes/no): "))?.to_lowercase();
        Ok(answer == "yes" || answer == "y")
    }

    fn input(&mut self, prompt: &str) -> CliResult<String> {
        self.ask(&format!("{prompt}: "))
    }

    fn choose(&mut self, prompt: &str, items: &[String]) -> CliResult<Option<usize>> {
        writeln!(self.writer, "{prompt}")?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.writer, "{}. {item}", i + 1)?;
        }
        let numbers: Vec<String> = (1..=items.len()).map(|n| n.to_string()).collect();
        let answer = self.ask(&format!("Enter your choice ({}): ", numbers.join("/")))?;

        Ok(answer
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=items.len()).contains(n))
            .map(|n| n - 1))
    }
}

// ── terminal widgets ──────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: dialoguer::theme::ColorfulTheme,
}

#[cfg(feature = "interactive")]
impl DialoguerPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "interactive")]
fn prompt_failed(e: dialoguer::Error) -> CliError {
    CliError::PromptFailed {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

#[cfg(feature = "interactive")]
impl Prompter for DialoguerPrompter {
    fn confirm(&mut self, prompt: &str) -> CliResult<bool> {
        dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(prompt_failed)
    }

    fn input(&mut self, prompt: &str) -> CliResult<String> {
        dialoguer::Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
            .map(|s| s.trim().to_owned())
            .map_err(prompt_failed)
    }

    fn choose(&mut self, prompt: &str, items: &[String]) -> CliResult<Option<usize>> {
        dialoguer::Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(prompt_failed)
    }
}
