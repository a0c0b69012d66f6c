//! `droidscaff permissions`: add a permission tier to the manifest.

use std::path::Path;

use tracing::instrument;

use droidscaff_adapters::{LocalFilesystem, XmlManifestEditor};
use droidscaff_core::{
    application::{ManifestService, ProjectLocator},
    domain::PermissionTier,
};

use crate::{
    cli::PermissionsArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::{Prompter, stdin_prompter},
};

pub fn execute(args: PermissionsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut prompter = stdin_prompter();
    let tier = args.tier.or(config.permissions.default_tier);
    permissions_stage(&args.path, tier, &output, prompter.as_mut())
}

/// Pick a tier (menu unless preselected), show its permissions, and add
/// them after one batch confirmation.
#[instrument(skip_all, fields(preselected = ?tier))]
pub(crate) fn permissions_stage(
    base: &Path,
    tier: Option<PermissionTier>,
    output: &OutputManager,
    prompter: &mut dyn Prompter,
) -> CliResult<()> {
    let tier = match tier {
        Some(tier) => tier,
        None => {
            let labels: Vec<String> = PermissionTier::ALL
                .iter()
                .map(|tier| tier.label().to_owned())
                .collect();
            let choice = prompter.choose("Select the permission category to add:", &labels)?;
            match choice.and_then(|i| PermissionTier::ALL.get(i).copied()) {
                Some(tier) => tier,
                None => {
                    output.error("Invalid choice! Skipping permissions.")?;
                    return Ok(());
                }
            }
        }
    };

    let locator = ProjectLocator::new(Box::new(LocalFilesystem::new()));
    let Some(manifest) = locator.locate_manifest(base) else {
        output.error("Manifest file not found in the specified app folder.")?;
        return Ok(());
    };
    output.info(&format!("Manifest file found at: {}", manifest.display()))?;

    output.print(&format!(
        "The following {} permissions will be added:",
        tier.label()
    ))?;
    for permission in tier.permissions() {
        output.item(permission)?;
    }

    if !prompter.confirm("Do you want to add these permissions?")? {
        output.print("Permission addition skipped.")?;
        return Ok(());
    }

    let requested: Vec<String> = tier.permissions().iter().map(|p| p.to_string()).collect();
    let service = ManifestService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(XmlManifestEditor::new()),
    );

    match service.add_permissions(&manifest, &requested) {
        Ok(edit) if edit.is_changed() => {
            output.success(&format!("Added permissions: {}", edit.added.join(", ")))?
        }
        Ok(_) => output.info("All permissions already exist in the AndroidManifest.xml file.")?,
        Err(e) => output.error(&format!("Error updating AndroidManifest.xml: {e}"))?,
    }

    Ok(())
}
