//! Installation of the generated file as the system hosts file, and
//! temporary unblocking of single domains in the installed copy.

use std::path::Path;
use tracing::info;

use crate::error::{HostsError, Result};
use crate::fs_abstraction::FileSystem;
use crate::normalize::url_strip;
use crate::parser::HostLine;

/// Default system hosts file
pub const SYSTEM_HOSTS_FILE: &str = "/etc/hosts";

/// Copy the cached hosts file over the system one.
pub fn install(fs: &dyn FileSystem, cache_file: &Path, hosts_file: &Path) -> Result<u64> {
    let bytes = fs
        .copy_preserving(cache_file, hosts_file)
        .map_err(|e| {
            // Point at whichever side is actually missing
            let path = if e.kind() == std::io::ErrorKind::NotFound && !fs.exists(cache_file) {
                cache_file
            } else {
                hosts_file
            };
            HostsError::storage(path, e)
        })?;

    info!("Installed {:?} -> {:?} ({} bytes)", cache_file, hosts_file, bytes);
    Ok(bytes)
}

/// Remove every line of `hosts_file` whose hostname part is `domain`.
///
/// The file is rewritten in place, not atomically. Blank lines are kept,
/// other lines are kept trimmed. Returns the number of removed lines.
///
/// A domain that normalizes to nothing (`www.`, `https://`) is rejected
/// before the file is touched.
pub fn allow_domain(fs: &dyn FileSystem, hosts_file: &Path, domain: &str) -> Result<usize> {
    let target = url_strip(domain);
    if target.is_empty() {
        return Err(HostsError::Config(format!(
            "nothing to unblock: '{}' has no hostname",
            domain.trim()
        )));
    }
    let content = fs
        .read_to_string(hosts_file)
        .map_err(|e| HostsError::storage(hosts_file, e))?;

    let (kept, removed) = filter_domain(&content, target);

    fs.write(hosts_file, kept.as_bytes())
        .map_err(|e| HostsError::storage(hosts_file, e))?;

    info!("Unblocked {} ({} lines removed)", target, removed);
    Ok(removed)
}

/// Filtered content plus the count of dropped lines.
fn filter_domain(content: &str, target: &str) -> (String, usize) {
    let mut kept = String::with_capacity(content.len());
    let mut removed = 0;

    for line in content.lines() {
        let line = line.trim();
        let matches = HostLine::split(line)
            .hostnames()
            .is_some_and(|hosts| url_strip(hosts) == target);

        if !line.is_empty() && matches {
            removed += 1;
            continue;
        }
        kept.push_str(line);
        kept.push('\n');
    }

    (kept, removed)
}
