//! Text transforms over a Gradle build script.
//!
//! Nothing here parses Gradle's DSL. The application id comes from a regular
//! expression and the `dependencies {` block is found by literal line
//! matching.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::dependencies::DependencySnippet;

/// File names accepted as the app module's build script.
pub const BUILD_SCRIPT_NAMES: [&str; 2] = ["build.gradle", "build.gradle.kts"];

/// Trimmed line that opens the block receiving inline dependencies.
pub const DEPENDENCIES_OPENING: &str = "dependencies {";

static APPLICATION_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"applicationId\s*=\s*"([^"]+)""#).expect("Invalid applicationId regex")
});

/// First `applicationId = "..."` literal in the script.
pub fn extract_application_id(script: &str) -> Option<&str> {
    APPLICATION_ID
        .captures(script)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Position of the line scanner relative to the `dependencies {` block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    Outside,
    InsideDependenciesBlock,
}

/// What a single line did to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    Opened,
    Closed,
    Passthrough,
}

impl BlockState {
    pub fn advance(self, line: &str) -> (Self, LineEvent) {
        match (self, line.trim()) {
            (Self::Outside, DEPENDENCIES_OPENING) => {
                (Self::InsideDependenciesBlock, LineEvent::Opened)
            }
            (Self::InsideDependenciesBlock, "}") => (Self::Outside, LineEvent::Closed),
            (state, _) => (state, LineEvent::Passthrough),
        }
    }
}

/// 1-based line number of the first `dependencies {` line.
pub fn find_dependencies_block(script: &str) -> Option<usize> {
    let mut state = BlockState::Outside;
    for (idx, line) in script.split_inclusive('\n').enumerate() {
        let (next, event) = state.advance(line);
        if event == LineEvent::Opened {
            return Some(idx + 1);
        }
        state = next;
    }
    None
}

/// Result of [`inject_dependencies`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub content: String,
    pub inserted: usize,
    pub block_found: bool,
}

impl Injection {
    pub fn changed(&self) -> bool {
        self.inserted > 0
    }
}

/// Copy `script` line by line, writing `accepted` right after the first
/// `dependencies {` line. All other bytes pass through unchanged.
pub fn inject_dependencies(script: &str, accepted: &[&DependencySnippet]) -> Injection {
    let extra: usize = accepted.iter().map(|s| s.text.len() + 4).sum();
    let mut content = String::with_capacity(script.len() + extra);
    let mut state = BlockState::Outside;
    let mut block_found = false;
    let mut inserted = 0;

    for line in script.split_inclusive('\n') {
        let (next, event) = state.advance(line);
        state = next;
        content.push_str(line);

        if event != LineEvent::Opened || block_found {
            continue;
        }
        block_found = true;

        if accepted.is_empty() {
            continue;
        }
        let crlf = line.ends_with("\r\n");
        if !line.ends_with('\n') {
            content.push('\n');
        }
        // Snippets go in verbatim, with no blank line after each one.
        for snippet in accepted {
            if crlf {
                content.push_str(&snippet.text.replace('\n', "\r\n"));
            } else {
                content.push_str(snippet.text);
            }
            inserted += 1;
        }
    }

    Injection {
        content,
        inserted,
        block_found,
    }
}
