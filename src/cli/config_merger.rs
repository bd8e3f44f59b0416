//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments take precedence over every file and environment layer.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

/// Applies CLI overrides on top of file-based configuration.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Loads the base configuration the CLI points at.
    ///
    /// `--config` selects a single file; otherwise the layered loader is used.
    /// `--env` picks the environment layer in both cases.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match &cli.config {
            Some(path) => ConfigLoader::with_file(path),
            None => ConfigLoader::new()?,
        };

        let loader = match cli.env {
            Some(env) => loader.with_environment(env.into()),
            None => loader,
        };

        tracing::debug!(
            environment = %loader.environment(),
            config_file = ?cli.config,
            "Loading configuration"
        );

        Ok(Self::new(loader.load()?))
    }

    /// Returns a copy of the base configuration with CLI overrides applied,
    /// validated again after merging.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(ref command) = cli.command {
            apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

fn apply_command_overrides(config: &mut Settings, command: &Commands) {
    match command {
        Commands::Serve {
            host,
            port,
            log_level,
            dry_run: _,
        } => {
            if let Some(host_addr) = host {
                config.server.host = host_addr.clone();
            }
            if let Some(port_num) = port {
                config.server.port = *port_num;
            }
            // Command-specific level beats --verbose/--quiet
            if let Some(level) = log_level {
                config.logger.level = (*level).into();
            }
        }
        Commands::Watch {
            base_url,
            interval_ms,
        } => {
            if let Some(url) = base_url {
                config.client.base_url = url.clone();
            }
            if let Some(interval) = interval_ms {
                config.client.poll_interval_ms = *interval;
            }
        }
    }
}
