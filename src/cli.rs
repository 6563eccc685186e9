//! CLI argument parsing with clap.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::fetcher::DEFAULT_TIMEOUT_SECS;
use crate::installer::SYSTEM_HOSTS_FILE;

#[derive(Parser, Debug)]
#[command(name = "hostsgen")]
#[command(author, version, about = "Build a hosts file from remote blocklists")]
#[command(group(
    ArgGroup::new("operation")
        .args(["refresh", "copy", "update", "allow"])
        .multiple(false)
))]
pub struct Cli {
    /// Refresh the cached hosts file
    #[arg(short = 'r', long)]
    pub refresh: bool,

    /// Copy the cached hosts file to the system hosts file
    #[arg(short = 'c', long)]
    pub copy: bool,

    /// Refresh the cache, then copy it to the system hosts file
    #[arg(short = 'u', long)]
    pub update: bool,

    /// Temporarily unblock a URL in the system hosts file
    #[arg(short = 'a', long, value_name = "URL")]
    pub allow: Option<String>,

    /// Config file path
    #[arg(long, env = "HOSTSGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the cached hosts file
    #[arg(long, env = "HOSTSGEN_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// System hosts file to install into
    #[arg(long, default_value = SYSTEM_HOSTS_FILE)]
    pub hosts_file: PathBuf,

    /// Per-request download timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long)]
    pub verbose: bool,
}

/// The single operation selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Refresh,
    Copy,
    Update,
    Allow(String),
}

impl Cli {
    /// Selected operation, or `None` when no operation flag was given
    pub fn operation(&self) -> Option<Operation> {
        if self.refresh {
            Some(Operation::Refresh)
        } else if self.copy {
            Some(Operation::Copy)
        } else if self.update {
            Some(Operation::Update)
        } else {
            self.allow.clone().map(Operation::Allow)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_refresh() {
        let cli = Cli::try_parse_from(["hostsgen", "-r", "--config", "/tmp/cfg"]).unwrap();
        assert_eq!(cli.operation(), Some(Operation::Refresh));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/cfg")));
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cli.hosts_file, PathBuf::from(SYSTEM_HOSTS_FILE));
    }

    #[test]
    fn test_parse_allow() {
        let cli = Cli::try_parse_from(["hostsgen", "--allow", "example.com"]).unwrap();
        assert_eq!(cli.operation(), Some(Operation::Allow("example.com".to_string())));

        let cli = Cli::try_parse_from(["hostsgen", "-a", "example.com"]).unwrap();
        assert_eq!(cli.operation(), Some(Operation::Allow("example.com".to_string())));
    }

    #[test]
    fn test_parse_copy_and_update() {
        let cli = Cli::try_parse_from(["hostsgen", "-c"]).unwrap();
        assert_eq!(cli.operation(), Some(Operation::Copy));
        let cli = Cli::try_parse_from(["hostsgen", "-u", "--timeout", "10"]).unwrap();
        assert_eq!(cli.operation(), Some(Operation::Update));
        assert_eq!(cli.timeout, 10);
    }

    #[test]
    fn test_operations_mutually_exclusive() {
        assert!(Cli::try_parse_from(["hostsgen", "-r", "-c"]).is_err());
        assert!(Cli::try_parse_from(["hostsgen", "-u", "-a", "example.com"]).is_err());
    }

    #[test]
    fn test_no_operation() {
        let cli = Cli::try_parse_from(["hostsgen"]).unwrap();
        assert_eq!(cli.operation(), None);
    }
}
