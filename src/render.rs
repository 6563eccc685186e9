//! Rendering of the generated hosts file.

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{HostsError, Result};
use crate::fs_abstraction::FileSystem;

/// File name of the generated hosts file inside the cache directory
pub const CACHE_FILE_NAME: &str = "hosts";

/// Marker line introducing the custom block section
pub const CUSTOM_MARKER: &str = "# CUSTOM URLS";

/// A fully computed hosts file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostsFile {
    pub hostname: String,
    /// Filtered, sorted blocklist entries
    pub entries: Vec<String>,
    /// Custom block entries, in configuration order
    pub custom: Vec<String>,
}

impl HostsFile {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HostsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "127.0.0.1 localhost {}", self.hostname)?;
        writeln!(f, "127.0.1.1 {}", self.hostname)?;
        writeln!(f)?;

        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }

        if !self.custom.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", CUSTOM_MARKER)?;
            for entry in &self.custom {
                writeln!(f, "{}", entry)?;
            }
        }
        Ok(())
    }
}

/// Location of the cache file; the working directory when no cache dir is set.
pub fn cache_path(cache_dir: Option<&Path>) -> PathBuf {
    match cache_dir {
        Some(dir) => dir.join(CACHE_FILE_NAME),
        None => PathBuf::from(CACHE_FILE_NAME),
    }
}

/// Write the rendered file, replacing any previous one atomically.
pub fn write_cache(fs: &dyn FileSystem, path: &Path, hosts: &HostsFile) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent)
            .map_err(|e| HostsError::storage(parent, e))?;
    }

    fs.write_atomic(path, hosts.render().as_bytes())
        .map_err(|e| HostsError::storage(path, e))?;

    info!(
        "Wrote {} entries ({} custom) to {:?}",
        hosts.entries.len(),
        hosts.custom.len(),
        path
    );
    Ok(())
}
