//! Parser for the loose hosts file dialect served by blocklists.
//!
//! One record per line, `#` starts a comment. Lines are canonicalized
//! rather than validated: whitespace runs collapse to a single space,
//! inline comments are dropped and the loopback address `127.0.0.1`
//! is rewritten to `0.0.0.0`.

/// Loopback address used by some lists, rewritten to [`BLOCK_IP`].
pub const LOOPBACK_IP: &str = "127.0.0.1";

/// Address every blocked hostname resolves to.
pub const BLOCK_IP: &str = "0.0.0.0";

const UTF8_BOM: char = '\u{feff}';

/// Parse a downloaded payload into canonical host entries.
///
/// Only lines whose very first character is `#` are skipped as
/// comments. A line with leading whitespace before `#` is collapsed
/// first and then cut at the comment, which yields the same result
/// for well-formed input.
///
/// Entries keep their source order and may repeat.
pub fn parse_hosts(payload: &[u8]) -> Vec<String> {
    let decoded = String::from_utf8_lossy(payload);
    let text = decoded.strip_prefix(UTF8_BOM).unwrap_or(&decoded[..]);

    split_lines(text)
        .filter(|line| !line.starts_with('#'))
        .filter_map(canonicalize_line)
        .collect()
}

/// Split on every line boundary Python's `str.splitlines` knows, so lists
/// with bare `\r` or Unicode separators still yield one record per line.
/// Empty pieces are dropped.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_line_break).filter(|line| !line.is_empty())
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Canonicalize a single line, returning `None` when nothing is left.
pub fn canonicalize_line(line: &str) -> Option<String> {
    let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
    let entry = collapsed
        .split('#')
        .next()
        .unwrap_or_default()
        .trim();

    if entry.is_empty() {
        return None;
    }

    Some(entry.replace(LOOPBACK_IP, BLOCK_IP))
}

/// A hosts line split at its first whitespace boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostLine<'a> {
    /// `<ip> <hostnames...>`; `rest` may hold several hostnames.
    Mapping { ip: &'a str, rest: &'a str },
    /// A line without any whitespace. Never matches an allowed domain.
    Bare(&'a str),
}

impl<'a> HostLine<'a> {
    pub fn split(line: &'a str) -> Self {
        let line = line.trim();
        match line.split_once(char::is_whitespace) {
            Some((ip, rest)) => HostLine::Mapping {
                ip,
                rest: rest.trim_start(),
            },
            None => HostLine::Bare(line),
        }
    }

    /// Hostname portion of the line, if it has one.
    pub fn hostnames(&self) -> Option<&'a str> {
        match self {
            HostLine::Mapping { rest, .. } => Some(rest),
            HostLine::Bare(_) => None,
        }
    }
}
