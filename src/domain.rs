/// URL helpers: which tabs are web pages, and how to show where they point
use url::Url;

/// True for `http`/`https` addresses; `chrome://`, `chrome-extension://`,
/// `file://`, `about:` and unparseable strings are not web pages
pub fn is_web_url(url: &str) -> bool {
    parse_web_url(url).is_some()
}

fn parse_web_url(url: &str) -> Option<Url> {
    Url::parse(url.trim())
        .ok()
        .filter(|parsed| matches!(parsed.scheme(), "http" | "https"))
}

/// Origin of a web URL, e.g. `https://news.bbc.co.uk:8443`
pub fn extract_origin(url: &str) -> Option<String> {
    parse_web_url(url).map(|parsed| parsed.origin().ascii_serialization())
}

/// Origin with the scheme stripped, as shown under the card title
///
/// Examples:
/// - https://www.google.com/search → www.google.com
/// - http://localhost:3000/app → localhost:3000
pub fn display_host(url: &str) -> Option<String> {
    let parsed = parse_web_url(url)?;
    let host = parsed.host_str()?;

    Some(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
