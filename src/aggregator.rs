//! Union of parsed blocklists into a single sorted entry set.

use std::collections::BTreeSet;
use tracing::info;

use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::parser::parse_hosts;

/// Parse every payload and merge the entries.
///
/// Duplicates are collapsed by full line, not by hostname, and the
/// result is sorted lexicographically. The order of `payloads` (i.e. fetch
/// completion order) has no effect on the output.
pub fn aggregate<P: AsRef<[u8]>>(payloads: &[P]) -> Vec<String> {
    let entries: BTreeSet<String> = payloads
        .iter()
        .flat_map(|payload| parse_hosts(payload.as_ref()))
        .collect();
    entries.into_iter().collect()
}

/// Fetch all blocklists and aggregate them.
///
/// Fails as a whole if any single source fails.
pub async fn collect_entries<S: AsRef<str>>(fetcher: &Fetcher, urls: &[S]) -> Result<Vec<String>> {
    info!("Fetching {} blocklists...", urls.len());
    let payloads = fetcher.fetch_all(urls).await?;

    let entries = aggregate(&payloads);
    info!(
        "Aggregated {} sources -> {} unique entries",
        payloads.len(),
        entries.len()
    );
    Ok(entries)
}
