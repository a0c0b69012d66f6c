//! `droidscaff config`: inspect the loaded configuration.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "permissions.default_tier" => Ok(config
            .permissions
            .default_tier
            .map(|tier| tier.to_string())
            .unwrap_or_default()),
        "dependencies.strategy" => Ok(config.dependencies.strategy.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use droidscaff_core::domain::PermissionTier;

    #[test]
    fn get_strategy_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "dependencies.strategy").unwrap(), "ask");
    }

    #[test]
    fn get_tier_when_set() {
        let mut cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "permissions.default_tier").unwrap(), "");

        cfg.permissions.default_tier = Some(PermissionTier::Intermediate);
        assert_eq!(
            get_config_value(&cfg, "permissions.default_tier").unwrap(),
            "intermediate"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
