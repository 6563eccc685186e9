//! Synthetic entries for explicitly blocked domains.

use crate::normalize::url_strip;
use crate::parser::BLOCK_IP;

/// Expand each custom block URL into a bare and a `www.` entry.
///
/// Configuration order is kept. URLs that normalize to nothing are skipped.
pub fn custom_entries<S: AsRef<str>>(block_urls: &[S]) -> Vec<String> {
    block_urls
        .iter()
        .map(|url| url_strip(url.as_ref()))
        .filter(|domain| !domain.is_empty())
        .flat_map(|domain| {
            [
                format!("{} {}", BLOCK_IP, domain),
                format!("{} www.{}", BLOCK_IP, domain),
            ]
        })
        .collect()
}
