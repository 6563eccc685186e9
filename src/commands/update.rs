//! Update command: refresh the cache, then install it.

use anyhow::Result;
use std::path::Path;
use std::time::Duration;

use super::required_cache_file;

/// Run the update command
pub async fn run(
    config_path: Option<&Path>,
    cache_dir: Option<&Path>,
    hosts_file: &Path,
    timeout: Duration,
) -> Result<()> {
    // Fail before downloading anything when the copy step cannot run
    required_cache_file(cache_dir)?;

    super::refresh::run(config_path, cache_dir, timeout).await?;
    super::copy::run(cache_dir, hosts_file).await
}
