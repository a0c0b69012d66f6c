//! `droidscaff scaffold`: layer folders and READMEs only.

use std::path::Path;

use droidscaff_adapters::LocalFilesystem;
use droidscaff_core::{
    application::ScaffoldService,
    domain::{CleanArchitectureLayout, PackageName},
};

use crate::{
    cli::ScaffoldArgs,
    commands::run::read_application_id,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ScaffoldArgs, output: OutputManager) -> CliResult<()> {
    let package = match args.package {
        Some(raw) => PackageName::parse(&raw).map_err(|e| CliError::InvalidInput {
            message: format!("--package {raw}"),
            source: Some(Box::new(e)),
        })?,
        None => {
            let Some(id) = read_application_id(&args.path, &output)? else {
                return Ok(());
            };
            match PackageName::parse(&id) {
                Ok(package) => package,
                Err(e) => {
                    output.error(&format!(
                        "applicationId '{id}' is not a usable package name: {e}"
                    ))?;
                    return Ok(());
                }
            }
        }
    };

    scaffold_stage(&args.path, &package, &output)
}

/// Create the folders, then the READMEs. Each failure is printed on its own
/// line; nothing stops early.
pub(crate) fn scaffold_stage(
    base: &Path,
    package: &PackageName,
    output: &OutputManager,
) -> CliResult<()> {
    output.info(&format!("Package name: {package}"))?;

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let layout = CleanArchitectureLayout::new(base, package);

    let folders = service.create_layout(base, package);
    for (path, e) in &folders.failed {
        output.error(&format!("Error creating folder {}: {e}", path.display()))?;
    }
    if folders.is_complete() {
        output.success(&format!(
            "Clean Architecture folder structure created successfully at {}",
            layout.package_root().display()
        ))?;
    }

    let readmes = service.write_readmes(base, package);
    for path in &readmes.succeeded {
        output.success(&format!("README created at: {}", path.display()))?;
    }
    for (path, e) in &readmes.failed {
        output.error(&format!("Error creating README {}: {e}", path.display()))?;
    }

    Ok(())
}
