//! Copy command: install the cached hosts file.

use anyhow::{Context, Result};
use std::path::Path;

use super::required_cache_file;
use crate::fs_abstraction::real_fs;
use crate::installer::install;

/// Run the copy command
pub async fn run(cache_dir: Option<&Path>, hosts_file: &Path) -> Result<()> {
    let cache_file = required_cache_file(cache_dir)?;

    install(real_fs(), &cache_file, hosts_file)
        .with_context(|| format!("Failed to install {:?}", cache_file))?;

    println!("[OK] Installed {}", hosts_file.display());
    Ok(())
}
