//! Allow-list filtering of aggregated entries.

use std::collections::HashSet;
use tracing::{debug, info};

use crate::normalize::url_strip;
use crate::parser::HostLine;

/// Drop entries whose hostname part exactly matches an allowed domain.
///
/// Both sides go through [`url_strip`], so `http://www.example.com` in
/// the allow-list matches `0.0.0.0 example.com`. There is no suffix
/// matching: allowing `example.com` keeps `0.0.0.0 ads.example.com`.
/// Lines without a hostname part are always kept.
pub fn filter_allowed<S: AsRef<str>>(entries: Vec<String>, allow_urls: &[S]) -> Vec<String> {
    if allow_urls.is_empty() {
        return entries;
    }

    let allowed: HashSet<&str> = allow_urls.iter().map(|url| url_strip(url.as_ref())).collect();
    let before = entries.len();

    let kept: Vec<String> = entries
        .into_iter()
        .filter(|entry| match HostLine::split(entry).hostnames() {
            Some(hosts) if allowed.contains(url_strip(hosts)) => {
                debug!("Allowing {}", entry);
                false
            }
            _ => true,
        })
        .collect();

    info!(
        "Allow-list removed {} entries ({} remaining)",
        before - kept.len(),
        kept.len()
    );
    kept
}
