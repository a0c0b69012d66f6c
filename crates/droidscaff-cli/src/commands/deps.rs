//! `droidscaff deps`: insert dependencies inline or via the version catalog.

use std::path::Path;

use tracing::{debug, instrument};

use droidscaff_adapters::LocalFilesystem;
use droidscaff_core::{
    application::{DependencyService, ProjectLocator},
    domain::{DependencySnippet, DependencyStrategy, INLINE_DEPENDENCIES},
};

use crate::{
    cli::DepsArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::{Prompter, stdin_prompter},
};

/// How the stage writes, once `ask` has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Inline,
    Catalog,
}

pub fn execute(args: DepsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut prompter = stdin_prompter();
    let strategy = args.strategy.unwrap_or(config.dependencies.strategy);
    deps_stage(&args.path, strategy, &output, prompter.as_mut())
}

#[instrument(skip_all, fields(strategy = %strategy))]
pub(crate) fn deps_stage(
    base: &Path,
    strategy: DependencyStrategy,
    output: &OutputManager,
    prompter: &mut dyn Prompter,
) -> CliResult<()> {
    let locator = ProjectLocator::new(Box::new(LocalFilesystem::new()));

    let method = match strategy {
        DependencyStrategy::Skip => {
            output.info("Dependency stage skipped.")?;
            return Ok(());
        }
        DependencyStrategy::Inline => Method::Inline,
        DependencyStrategy::Catalog => Method::Catalog,
        DependencyStrategy::Ask => {
            if locator.locate_version_catalog(base).is_none() {
                output.info("libs.versions.toml not found. Using Method 1.")?;
                Method::Inline
            } else {
                let methods = [
                    "Method 1: insert into the build script".to_string(),
                    "Method 2: append to gradle/libs.versions.toml".to_string(),
                ];
                let prompt = "libs.versions.toml found. How should dependencies be added?";
                match prompter.choose(prompt, &methods)? {
                    Some(0) => Method::Inline,
                    Some(_) => Method::Catalog,
                    None => {
                        output.error("Invalid choice! Skipping dependencies.")?;
                        return Ok(());
                    }
                }
            }
        }
    };

    match method {
        Method::Inline => add_inline(base, &locator, output, prompter),
        Method::Catalog => add_to_catalog(base, &locator, output),
    }
}

fn add_inline(
    base: &Path,
    locator: &ProjectLocator,
    output: &OutputManager,
    prompter: &mut dyn Prompter,
) -> CliResult<()> {
    let script = match locator.locate_build_script(base) {
        Ok(Some(script)) => script,
        Ok(None) => {
            output.error(
                "build.gradle or build.gradle.kts file not found in the specified app folder.",
            )?;
            return Ok(());
        }
        Err(e) => {
            output.error(&format!("Error searching for the Gradle file: {e}"))?;
            return Ok(());
        }
    };

    let service = DependencyService::new(Box::new(LocalFilesystem::new()));
    match service.dependencies_block_line(&script) {
        Ok(Some(line)) => debug!(line, "dependencies block found"),
        Ok(None) => {
            output.warning(&format!(
                "No dependencies block found in {}. Nothing was added.",
                script.display()
            ))?;
            return Ok(());
        }
        Err(e) => {
            output.error(&format!("Error adding dependencies in build.gradle: {e}"))?;
            return Ok(());
        }
    }

    let mut accepted: Vec<&DependencySnippet> = Vec::new();
    for snippet in INLINE_DEPENDENCIES.iter() {
        let question = format!("Do you want to add:\n{}\n", snippet.text.trim_end());
        if prompter.confirm(&question)? {
            accepted.push(snippet);
        }
    }

    match service.inject_inline(&script, &accepted) {
        Ok(injection) if injection.changed() => output.success(
            "Dependencies successfully appended to the dependencies block where confirmed.",
        )?,
        Ok(_) => output.info("No dependencies were added.")?,
        Err(e) => output.error(&format!("Error adding dependencies in build.gradle: {e}"))?,
    }

    Ok(())
}

fn add_to_catalog(base: &Path, locator: &ProjectLocator, output: &OutputManager) -> CliResult<()> {
    let Some(catalog) = locator.locate_version_catalog(base) else {
        output.error("gradle/libs.versions.toml not found in the specified project folder.")?;
        return Ok(());
    };

    let service = DependencyService::new(Box::new(LocalFilesystem::new()));
    match service.append_version_catalog(&catalog) {
        Ok(()) => output.success("Dependencies added using Method 2 in libs.versions.toml.")?,
        Err(e) => output.error(&format!("Error adding dependencies in libs.versions.toml: {e}"))?,
    }

    Ok(())
}
