//! `droidscaff run`: the full interactive session.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use droidscaff_adapters::LocalFilesystem;
use droidscaff_core::{application::ProjectLocator, domain::PackageName};

use crate::{
    cli::RunArgs,
    commands::{deps, permissions, scaffold},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::{Prompter, stdin_prompter},
};

pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut prompter = stdin_prompter();
    session(args, &config, &output, prompter.as_mut())
}

/// Path, applicationId, confirmation, then the three stages in order.
#[instrument(skip_all)]
pub(crate) fn session(
    args: RunArgs,
    config: &AppConfig,
    output: &OutputManager,
    prompter: &mut dyn Prompter,
) -> CliResult<()> {
    let base = match args.path {
        Some(path) => path,
        None => PathBuf::from(prompter.input("Enter the path to your app folder")?),
    };

    let Some(application_id) = read_application_id(&base, output)? else {
        return Ok(());
    };

    let package = match PackageName::parse(&application_id) {
        Ok(package) => package,
        Err(e) => {
            output.error(&format!(
                "applicationId '{application_id}' is not a usable package name: {e}"
            ))?;
            return Ok(());
        }
    };

    if !prompter.confirm(&format!("Is the applicationId '{application_id}' correct?"))? {
        output.print("Confirmation declined.")?;
        return Ok(());
    }
    output.success("Confirmed!")?;

    scaffold::scaffold_stage(&base, &package, output)?;

    let tier = args.tier.or(config.permissions.default_tier);
    permissions::permissions_stage(&base, tier, output, prompter)?;

    let strategy = args.deps.unwrap_or(config.dependencies.strategy);
    deps::deps_stage(&base, strategy, output, prompter)?;

    info!(package = %package, "Session finished");
    output.success("Project setup finished.")?;
    Ok(())
}

/// Locate the build script under `<base>/app` and pull its applicationId.
///
/// Every way of not getting an id is printed and yields `Ok(None)`.
pub(crate) fn read_application_id(
    base: &Path,
    output: &OutputManager,
) -> CliResult<Option<String>> {
    let locator = ProjectLocator::new(Box::new(LocalFilesystem::new()));

    let script = match locator.locate_build_script(base) {
        Ok(Some(script)) => script,
        Ok(None) => {
            output.error(
                "build.gradle or build.gradle.kts file not found in the specified app folder.",
            )?;
            return Ok(None);
        }
        Err(e) => {
            output.error(&format!("Error searching for the Gradle file: {e}"))?;
            return Ok(None);
        }
    };
    output.info(&format!("Gradle file found at: {}", script.display()))?;

    match locator.read_application_id(&script) {
        Ok(Some(id)) => {
            output.info(&format!("Extracted applicationId: {id}"))?;
            Ok(Some(id))
        }
        Ok(None) => {
            output.error("applicationId not found in the Gradle file.")?;
            Ok(None)
        }
        Err(e) => {
            output.error(&format!("Error reading file: {e}"))?;
            Ok(None)
        }
    }
}
