//! # hostsgen - hosts file generator
//!
//! Aggregates remote host-blocking lists into a single deduplicated,
//! filtered hosts file, installs it as the system hosts file, and can
//! temporarily unblock a single domain.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Config (sectioned text file)                               │
//! │    └── blocklists, allow_urls, block_urls                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Fetcher (reqwest + rustls)                                 │
//! │    └── one concurrent request per blocklist, fail-fast      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Parser + Aggregator                                        │
//! │    └── canonical lines, set union, lexicographic sort       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Allow filter + custom block entries                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Render (cache file) -> Installer (/etc/hosts)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use hostsgen::aggregator::collect_entries;
//! use hostsgen::allowlist::filter_allowed;
//! use hostsgen::config::Config;
//! use hostsgen::fetcher::Fetcher;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load(Some(Path::new("/etc/hostsgen.conf")))?;
//!
//!     let fetcher = Fetcher::new()?;
//!     let entries = collect_entries(&fetcher, &config.blocklists).await?;
//!     let entries = filter_allowed(entries, &config.allow_urls);
//!
//!     println!("{} entries", entries.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`aggregator`] - Union and sort of parsed blocklists
//! - [`allowlist`] - Allow-list filtering
//! - [`cli`] - Command-line interface definitions
//! - [`cmd_abstraction`] - Mockable command execution (hostname lookup)
//! - [`commands`] - CLI command implementations
//! - [`config`] - Configuration file parsing
//! - [`custom_block`] - Entries for explicitly blocked domains
//! - [`error`] - Error types
//! - [`fetcher`] - Concurrent HTTP downloads
//! - [`fs_abstraction`] - Mockable filesystem operations
//! - [`installer`] - Install and temporary allow
//! - [`normalize`] - URL normalization
//! - [`parser`] - Hosts line parsing
//! - [`render`] - Hosts file rendering

pub mod aggregator;
pub mod allowlist;
pub mod cli;
pub mod cmd_abstraction;
pub mod commands;
pub mod config;
pub mod custom_block;
pub mod error;
pub mod fetcher;
pub mod fs_abstraction;
pub mod installer;
pub mod normalize;
pub mod parser;
pub mod render;

pub use cli::{Cli, Operation};
pub use config::Config;
pub use error::HostsError;
