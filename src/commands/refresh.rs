//! Refresh command: regenerate the cached hosts file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::aggregator::collect_entries;
use crate::allowlist::filter_allowed;
use crate::cmd_abstraction::{local_hostname, CommandExecutor, RealCommandExecutor};
use crate::config::Config;
use crate::custom_block::custom_entries;
use crate::fetcher::Fetcher;
use crate::fs_abstraction::real_fs;
use crate::render::{cache_path, write_cache, HostsFile};

/// Run the refresh command, returning the path of the written file
pub async fn run(
    config_path: Option<&Path>,
    cache_dir: Option<&Path>,
    timeout: Duration,
) -> Result<PathBuf> {
    let config = Config::load(config_path)?;
    let fetcher = Fetcher::with_timeout(timeout)?;

    let hosts = generate(&config, &fetcher, &RealCommandExecutor).await?;

    let output = cache_path(cache_dir);
    write_cache(real_fs(), &output, &hosts)
        .with_context(|| format!("Failed to write hosts cache {:?}", output))?;

    println!(
        "[OK] {} entries written to {}",
        hosts.entries.len() + hosts.custom.len(),
        output.display()
    );
    Ok(output)
}

/// Build the complete hosts file for `config`.
///
/// Nothing is written here; a fetch failure leaves any existing cache
/// untouched.
pub async fn generate(
    config: &Config,
    fetcher: &Fetcher,
    executor: &dyn CommandExecutor,
) -> Result<HostsFile> {
    let entries = collect_entries(fetcher, &config.blocklists)
        .await
        .context("Failed to download blocklists")?;
    let entries = filter_allowed(entries, &config.allow_urls);

    let custom = custom_entries(&config.block_urls);
    if !custom.is_empty() {
        info!("Adding {} custom block entries", custom.len());
    }

    let hostname = local_hostname(executor)?;

    Ok(HostsFile {
        hostname,
        entries,
        custom,
    })
}
