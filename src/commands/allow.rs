//! Allow command: temporarily unblock a domain in the system hosts file.
//!
//! The change lasts until the next refresh + copy.

use anyhow::{Context, Result};
use std::path::Path;

use crate::fs_abstraction::real_fs;
use crate::installer::allow_domain;
use crate::normalize::url_strip;

/// Run the allow command
pub async fn run(url: &str, hosts_file: &Path) -> Result<()> {
    let removed = allow_domain(real_fs(), hosts_file, url)
        .with_context(|| format!("Failed to unblock {}", url))?;

    if removed == 0 {
        println!("{} was not blocked", url_strip(url));
    } else {
        println!("[OK] Unblocked {} ({} entries removed)", url_strip(url), removed);
        println!("     Run 'hostsgen -u' to restore blocking");
    }
    Ok(())
}
