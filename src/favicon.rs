/// Favicon sources for the tab card, tried in order until one loads

use crate::config::DEFAULT_ICON;
use crate::domain::extract_origin;
use crate::tab_data::Tab;

/// Ordered image sources: the browser's favicon hint, the site's
/// `/favicon.ico`, then the bundled icon. The last entry is always the
/// bundled icon and no source appears twice in a row.
pub fn candidates(tab: &Tab) -> Vec<String> {
    let site_icon = extract_origin(&tab.url).map(|origin| format!("{}/favicon.ico", origin));

    let mut sources: Vec<String> = Vec::with_capacity(3);
    let hint = tab.fav_icon_url.as_deref().filter(|url| !url.is_empty());

    for source in [hint.map(str::to_string), site_icon, Some(DEFAULT_ICON.to_string())]
        .into_iter()
        .flatten()
    {
        if sources.last() != Some(&source) {
            sources.push(source);
        }
    }

    sources
}

/// Index of the source to try after `current` failed, or `None` when exhausted
pub fn next_index(current: usize, total: usize) -> Option<usize> {
    let next = current + 1;
    (next < total).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_chain() {
        let tab = Tab::new(1, "https://github.com/rust-lang", 0.0)
            .with_fav_icon("https://github.githubassets.com/favicon.svg");

        assert_eq!(
            candidates(&tab),
            vec![
                "https://github.githubassets.com/favicon.svg".to_string(),
                "https://github.com/favicon.ico".to_string(),
                DEFAULT_ICON.to_string(),
            ]
        );
    }

    #[test]
    fn test_without_hint() {
        let tab = Tab::new(1, "http://localhost:3000/app", 0.0);

        assert_eq!(
            candidates(&tab),
            vec!["http://localhost:3000/favicon.ico".to_string(), DEFAULT_ICON.to_string()]
        );
    }

    #[test]
    fn test_hint_equal_to_site_icon_is_not_repeated() {
        let tab = Tab::new(1, "https://example.com/page", 0.0).with_fav_icon("https://example.com/favicon.ico");

        assert_eq!(candidates(&tab).len(), 2);
    }

    #[test]
    fn test_empty_hint_ignored() {
        let tab = Tab::new(1, "https://example.com", 0.0).with_fav_icon("");
        assert_eq!(candidates(&tab)[0], "https://example.com/favicon.ico");
    }

    #[test]
    fn test_unparseable_url_falls_back_to_bundled_icon() {
        let tab = Tab::new(1, "chrome://settings", 0.0);
        assert_eq!(candidates(&tab), vec![DEFAULT_ICON.to_string()]);
    }

    #[test]
    fn test_next_index() {
        assert_eq!(next_index(0, 3), Some(1));
        assert_eq!(next_index(1, 3), Some(2));
        assert_eq!(next_index(2, 3), None);
        assert_eq!(next_index(0, 1), None);
    }
}
