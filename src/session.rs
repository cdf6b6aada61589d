/// Tabs already judged during the current triage session
use crate::tab_data::TabId;
use serde::{Deserialize, Serialize};

/// Ordered ids of tabs the user kept or closed this session.
///
/// Insertion order is preserved. A repeated id is appended again; only
/// membership matters to the selector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessedSet {
    ids: Vec<TabId>,
}

impl ProcessedSet {
    pub fn new() -> Self {
        ProcessedSet { ids: Vec::new() }
    }

    pub fn ids(&self) -> &[TabId] {
        &self.ids
    }

    pub fn reset(&mut self) {
        self.ids.clear();
    }

    pub fn mark_processed(&mut self, tab_id: TabId) -> &[TabId] {
        self.ids.push(tab_id);
        &self.ids
    }
}

#[cfg(test)]
impl ProcessedSet {
    pub fn contains(&self, tab_id: TabId) -> bool {
        self.ids.contains(&tab_id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

impl From<Vec<TabId>> for ProcessedSet {
    fn from(ids: Vec<TabId>) -> Self {
        ProcessedSet { ids }
    }
}
