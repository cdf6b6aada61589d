/// Tab selection: filtering, ordering and picking the next tab to judge

use crate::domain::is_web_url;
use crate::tab_data::{Tab, TabId, TAB_ID_NONE};

/// A tab can be triaged if it is a real browser tab showing a web page
pub fn is_eligible(tab: &Tab) -> bool {
    tab.id != TAB_ID_NONE && is_web_url(&tab.url)
}

/// Eligible tabs in presentation order
///
/// Algorithm:
/// 1. Keep only http/https tabs
/// 2. Sort by last access, most recent first (stable, so ties keep window order)
/// 3. On a fresh session, move the active tab to the front
pub fn ordered_candidates(tabs: &[Tab], is_fresh_session: bool) -> Vec<&Tab> {
    let mut pages: Vec<&Tab> = tabs.iter().filter(|tab| is_eligible(tab)).collect();

    pages.sort_by(|a, b| b.last_accessed.total_cmp(&a.last_accessed));

    if is_fresh_session {
        if let Some(pos) = pages.iter().position(|tab| tab.active) {
            let active = pages.remove(pos);
            pages.insert(0, active);
        }
    }

    pages
}

/// Next tab to present, or `None` once every eligible tab has been judged
pub fn select_next<'a>(tabs: &'a [Tab], processed: &[TabId], is_fresh_session: bool) -> Option<&'a Tab> {
    ordered_candidates(tabs, is_fresh_session)
        .into_iter()
        .find(|tab| !processed.contains(&tab.id))
}

/// Number of eligible tabs not yet judged
pub fn count_remaining(tabs: &[Tab], processed: &[TabId]) -> usize {
    tabs.iter()
        .filter(|tab| is_eligible(tab) && !processed.contains(&tab.id))
        .count()
}
