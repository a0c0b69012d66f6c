//! Command handlers.
//!
//! Each stage module exposes `execute` for its standalone subcommand and a
//! `*_stage` function that `run` chains. Stage functions report soft
//! failures through [`OutputManager`](crate::output::OutputManager) and
//! return `Ok`; only output, prompt, or cancellation errors propagate.

pub mod completions;
pub mod config;
pub mod deps;
pub mod init;
pub mod permissions;
pub mod run;
pub mod scaffold;
