use clap::{Command, CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

use crate::config::{CONFIG_ENV, Config};

#[derive(Parser, Debug)]
#[command(name = "zonectl", version, about = "Manage DNS zone records")]
pub struct Cli {
    /// Use verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// List domains
    #[arg(short, long)]
    pub list: bool,

    /// Update or create a record: "zone name type oldvalue newvalue ttl"
    /// (use - for oldvalue to create)
    #[arg(short, long, value_name = "SPEC")]
    pub update: Option<String>,

    /// Delete a record: "zone name type value"
    #[arg(short, long, value_name = "SPEC")]
    pub delete: Option<String>,

    /// Output records in plain, json or table format
    #[arg(short, long, default_value = "plain")]
    pub format: String,

    /// Only list records of this type
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub record_type: Option<String>,

    /// Sort records by name before printing
    #[arg(short, long)]
    pub sort: bool,

    /// Config file path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Zones whose records should be listed
    #[arg(value_name = "ZONE")]
    pub zones: Vec<String>,
}

/// Command definition with a sample config file in the help text.
pub fn command() -> Command {
    Cli::command().after_help(format!(
        "Config file (TOML), read from --config, ${CONFIG_ENV} or the platform config \
         directory:\n\n{}\n\
         An empty name addresses the zone apex, e.g. -u \"example.com  MX - mx.example.com 3600\".",
        Config::example()
    ))
}

pub fn parse() -> Cli {
    let matches = command().get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

impl Cli {
    pub fn has_action(&self) -> bool {
        self.list || self.update.is_some() || self.delete.is_some() || !self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        command().debug_assert();
    }

    #[test]
    fn test_help_shows_loadable_config() {
        let help = command().render_long_help().to_string();
        assert!(help.contains("token = \"TOKENHERE1234\""));
        assert!(help.contains(CONFIG_ENV));
        assert!(Config::from_toml(&Config::example()).is_ok());
    }

    #[test]
    fn test_parse_update() {
        let cli = Cli::parse_from([
            "zonectl",
            "-f",
            "table",
            "-u",
            "example.com www A - 1.2.3.4 300",
        ]);
        assert_eq!(cli.format, "table");
        assert_eq!(cli.update.as_deref(), Some("example.com www A - 1.2.3.4 300"));
        assert!(cli.has_action());
    }

    #[test]
    fn test_parse_zones_with_filter() {
        let cli = Cli::parse_from(["zonectl", "-t", "MX", "-s", "example.com", "example.org"]);
        assert_eq!(cli.record_type.as_deref(), Some("MX"));
        assert!(cli.sort);
        assert_eq!(cli.zones, ["example.com", "example.org"]);
        assert_eq!(cli.format, "plain");
    }

    #[test]
    fn test_no_action() {
        let cli = Cli::parse_from(["zonectl", "-v"]);
        assert!(!cli.has_action());
    }
}
