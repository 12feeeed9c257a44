//! Address bar text normalization.

use crate::constants::SEARCH_PREFIX;
use crate::error::SurfaceError;

/// Turn address bar text into something the web view can load.
///
/// - text with a scheme is used as-is
/// - host-like text (`example.com`, `localhost:8080`) gets `https://`
/// - anything else becomes a search query
pub fn normalize_address(input: &str) -> Result<String, SurfaceError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(SurfaceError::InvalidAddress(input.to_string()));
    }

    if has_scheme(text) {
        return Ok(text.to_string());
    }

    if looks_like_host(text) {
        return Ok(format!("https://{}", text));
    }

    Ok(format!("{}{}", SEARCH_PREFIX, urlencoding::encode(text)))
}

fn has_scheme(text: &str) -> bool {
    if text.starts_with("about:") || text.starts_with("data:") {
        return true;
    }
    match text.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

fn looks_like_host(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }

    let host = text.split(['/', '?', '#']).next().unwrap_or(text);
    let host_no_port = host.rsplit_once(':').map_or(host, |(h, port)| {
        if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) {
            h
        } else {
            host
        }
    });

    if host_no_port.eq_ignore_ascii_case("localhost") {
        return true;
    }

    host_no_port.contains('.') && !host_no_port.starts_with('.') && !host_no_port.ends_with('.')
}
