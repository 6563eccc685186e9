//! URL normalization shared by the allow filter, custom block entries
//! and temporary allow.

/// Strip the scheme and a leading `www.` from a URL or domain.
///
/// `https://` is checked first, then `http://`; the `www.` prefix is
/// stripped after either. Case is preserved, so `Example.com` and
/// `example.com` are distinct keys.
///
/// # Examples
/// ```
/// use hostsgen::normalize::url_strip;
/// assert_eq!(url_strip("https://www.example.com"), "example.com");
/// assert_eq!(url_strip("  ads.example.com "), "ads.example.com");
/// ```
pub fn url_strip(url: &str) -> &str {
    let url = url.trim();
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    url.strip_prefix("www.").unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_strip_schemes() {
        assert_eq!(url_strip("https://example.com"), "example.com");
        assert_eq!(url_strip("http://example.com"), "example.com");
        assert_eq!(url_strip("example.com"), "example.com");
    }

    #[test]
    fn test_url_strip_www() {
        assert_eq!(url_strip("www.example.com"), "example.com");
        assert_eq!(url_strip("http://www.example.com"), "example.com");
        assert_eq!(url_strip("https://www.example.com"), "example.com");
    }

    #[test]
    fn test_url_strip_only_leading_www() {
        assert_eq!(url_strip("ads.www.example.com"), "ads.www.example.com");
        assert_eq!(url_strip("wwwexample.com"), "wwwexample.com");
    }

    #[test]
    fn test_url_strip_trims() {
        assert_eq!(url_strip("  \thttps://example.com\n"), "example.com");
        assert_eq!(url_strip("   "), "");
    }

    #[test]
    fn test_url_strip_preserves_case() {
        assert_eq!(url_strip("http://Example.com"), "Example.com");
        assert_ne!(url_strip("http://Example.com"), url_strip("example.com"));
    }

    #[test]
    fn test_url_strip_single_scheme_only() {
        // Only one scheme prefix is removed per call
        assert_eq!(url_strip("https://http://example.com"), "http://example.com");
    }

    #[test]
    fn test_url_strip_keeps_path() {
        assert_eq!(url_strip("https://example.com/path"), "example.com/path");
    }
}
