//! CLI command definitions

use bfhl_domain::LogFormat;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for bfhl-server
#[derive(Parser, Debug)]
#[command(name = "bfhl-server")]
#[command(author, version, about = "BFHL compute service - arithmetic and single-word answers over HTTP")]
#[command(long_about = r#"
bfhl-server exposes two endpoints:

  GET  /health   Report the configured identity
  POST /bfhl     Run exactly one operation: fibonacci, prime, lcm, hcf or AI

Configuration is loaded from (in priority order):
1. BFHL_* environment variables (e.g. BFHL_SERVER__PORT=8080)
2. OFFICIAL_EMAIL, PORT and GEMINI_API_KEY environment variables
3. --config <path>     Explicit config file
4. ./bfhl.toml         Project-level config
5. ~/.config/bfhl/config.toml   Global config

Command-line flags override all of the above.

Example:
  OFFICIAL_EMAIL=dev@example.com bfhl-server --port 8080
  bfhl-server --config ./deploy.toml --log-json -v
"#)]
pub struct Cli {
    /// Interface to bind (overrides server.host)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind (overrides server.port and PORT)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (environment variables still apply)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Also write logs to a daily-rolling file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Log format after applying `--log-json` over the configured one.
    pub fn log_format(&self, configured: LogFormat) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            configured
        }
    }

    /// Default filter directive for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "bfhl-server",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--config",
            "deploy.toml",
            "-vv",
            "--log-json",
        ]);
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.config, Some(PathBuf::from("deploy.toml")));
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(cli.log_format(LogFormat::Text), LogFormat::Json);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_defaults_defer_to_config() {
        let cli = Cli::parse_from(["bfhl-server"]);
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert_eq!(cli.log_level(), "warn");
        assert_eq!(cli.log_format(LogFormat::Json), LogFormat::Json);
        assert_eq!(cli.log_format(LogFormat::Text), LogFormat::Text);
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["bfhl-server", "--port", "99999"]).is_err());
    }
}
