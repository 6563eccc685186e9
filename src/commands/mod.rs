//! CLI command implementations.

pub mod allow;
pub mod copy;
pub mod refresh;
pub mod update;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::error::HostsError;
use crate::render::cache_path;

/// Cache file location for commands that need an explicit cache directory
fn required_cache_file(cache_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = cache_dir.ok_or_else(|| {
        HostsError::Config(
            "Cache directory is not set (use --cache-dir or HOSTSGEN_CACHE_DIR)".to_string(),
        )
    })?;
    Ok(cache_path(Some(dir)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_cache_file() {
        assert_eq!(
            required_cache_file(Some(Path::new("/var/cache/hostsgen"))).unwrap(),
            PathBuf::from("/var/cache/hostsgen/hosts")
        );
        assert!(required_cache_file(None).is_err());
    }
}
