//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Quiz and user REST API with a terminal quiz watcher
#[derive(Parser, Debug)]
#[command(name = "quiz-zone")]
#[command(about = "Quiz and user REST API with a terminal quiz watcher")]
#[command(long_about = "
quiz-zone serves a small REST API for users and quizzes backed by a
document store, and ships a terminal client that polls the quiz list.

EXAMPLES:
    # Start the server with default configuration
    quiz-zone serve

    # Start server on custom host and port
    quiz-zone serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    quiz-zone --config /path/to/config.toml serve

    # Check configuration without starting server
    quiz-zone serve --dry-run

    # Watch the most recent quizzes of a running server
    quiz-zone watch --base-url http://127.0.0.1:3000/api

    # Poll every second instead of every three
    quiz-zone watch --interval-ms 1000
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Use this TOML file instead of the layered files under the config
    /// directory. The file must exist and be readable.
    ///
    /// Example: --config /etc/quiz-zone/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` layer is loaded.
    ///
    /// Available values: development (dev), test, staging (stage), production (prod)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Raises log output to debug level. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Lowers log output to error level only. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Launches the HTTP server with the configured settings and an
    /// in-process document store.
    ///
    /// Examples:
    ///   quiz-zone serve                           # Start with defaults
    ///   quiz-zone serve --host 0.0.0.0 --port 80 # Bind to all interfaces on port 80
    ///   quiz-zone serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept connections
        /// from any interface.
        ///
        /// Default: 127.0.0.1
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// Must be between 1 and 65535.
        ///
        /// Default: 3000
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Takes precedence over the configuration file and the global
        /// --verbose/--quiet flags.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Poll the quiz list and render it as a table
    ///
    /// Requests `{base-url}/quizzes` on a fixed interval until Ctrl+C. Failed
    /// requests are reported on stderr and the last good list is kept.
    ///
    /// Examples:
    ///   quiz-zone watch
    ///   quiz-zone watch --base-url http://quiz.example.com/api --interval-ms 5000
    Watch {
        /// API root of the server, including its base path
        ///
        /// Default: http://127.0.0.1:3000/api
        #[arg(long, value_name = "URL", value_parser = super::validation::validate_base_url)]
        base_url: Option<String>,

        /// Delay between requests in milliseconds (minimum 100)
        ///
        /// Default: 3000
        #[arg(long, value_name = "MILLIS", value_parser = super::validation::validate_interval_ms)]
        interval_ms: Option<u64>,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl Cli {
    /// Checks argument combinations clap cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        Ok(())
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
