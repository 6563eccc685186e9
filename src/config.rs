//! Configuration loading for hostsgen.
//!
//! The file is a list of sections. A line ending in `=` opens a section,
//! every following line is one value, until the next header:
//!
//! ```text
//! # comments and blank lines are ignored
//! blocklists=
//! https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts
//!
//! allow_urls=
//! www.example.com
//!
//! block_urls=
//! tracker.io
//! ```

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{HostsError, Result};

const SECTION_BLOCKLISTS: &str = "blocklists";
const SECTION_ALLOW_URLS: &str = "allow_urls";
const SECTION_BLOCK_URLS: &str = "block_urls";

const KNOWN_SECTIONS: &[&str] = &[SECTION_BLOCKLISTS, SECTION_ALLOW_URLS, SECTION_BLOCK_URLS];

/// Environment variable consulted when no `--config` is given
pub const CONFIG_ENV: &str = "HOSTSGEN_CONFIG";

/// Immutable configuration, loaded once per invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Remote hosts files to aggregate
    pub blocklists: Vec<String>,

    /// Domains never blocked, whatever the lists say
    pub allow_urls: Vec<String>,

    /// Domains blocked without being fetched
    pub block_urls: Vec<String>,
}

impl Config {
    /// Load configuration from a file.
    ///
    /// A missing path or an unreadable file is a configuration error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.ok_or_else(|| {
            HostsError::Config(format!(
                "Config file not specified (use --config or {})",
                CONFIG_ENV
            ))
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            HostsError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config = Self::parse(&content)?;
        debug!(
            "Loaded {:?}: {} blocklists, {} allowed, {} custom blocks",
            path,
            config.blocklists.len(),
            config.allow_urls.len(),
            config.block_urls.len()
        );
        Ok(config)
    }

    /// Parse configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let mut sections = parse_sections(content)?;

        for name in sections.keys() {
            if !KNOWN_SECTIONS.contains(&name.as_str()) {
                warn!("Ignoring unknown config section '{}'", name);
            }
        }

        let blocklists = sections.remove(SECTION_BLOCKLISTS).ok_or_else(|| {
            HostsError::Config(format!("Missing required section '{}='", SECTION_BLOCKLISTS))
        })?;
        if blocklists.is_empty() {
            return Err(HostsError::Config(format!(
                "Section '{}=' has no entries",
                SECTION_BLOCKLISTS
            )));
        }

        Ok(Self {
            blocklists,
            allow_urls: sections.remove(SECTION_ALLOW_URLS).unwrap_or_default(),
            block_urls: sections.remove(SECTION_BLOCK_URLS).unwrap_or_default(),
        })
    }
}

/// Split the text into named sections.
///
/// A repeated header starts its section over.
fn parse_sections(content: &str) -> Result<HashMap<String, Vec<String>>> {
    let mut sections: HashMap<String, Vec<String>> = HashMap::new();
    let mut current: Option<String> = None;

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_suffix('=') {
            let name = name.trim().to_string();
            sections.insert(name.clone(), Vec::new());
            current = Some(name);
            continue;
        }

        let section = current.as_ref().ok_or_else(|| {
            HostsError::Config(format!(
                "Line {}: value '{}' appears before any section header",
                index + 1,
                line
            ))
        })?;
        sections
            .entry(section.clone())
            .or_default()
            .push(line.to_string());
    }

    Ok(sections)
}
