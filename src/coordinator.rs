/// Background-side state: answers popup requests and owns the processed set

use crate::messages::{Request, Response};
use crate::session::ProcessedSet;
use crate::storage::StorageData;
use crate::tab_data::TabId;

/// Host work the background must do after replying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Flag the next popup open as an auto-reopen, close the tab, refocus
    /// the last window and reopen the popup
    CloseAndReopen { tab_id: TabId },
}

/// One host call of a follow-up, run in order
#[derive(Debug, Clone, PartialEq)]
pub enum ReopenStep {
    /// Persist the flag; failure abandons the remaining steps
    WriteFlag(StorageData),
    /// Close the tab if it still exists
    RemoveTab(TabId),
    RefocusLastWindow,
    OpenPopup,
}

impl FollowUp {
    pub fn steps(&self) -> Vec<ReopenStep> {
        match *self {
            FollowUp::CloseAndReopen { tab_id } => vec![
                ReopenStep::WriteFlag(StorageData::with_auto_reopen(true)),
                ReopenStep::RemoveTab(tab_id),
                ReopenStep::RefocusLastWindow,
                ReopenStep::OpenPopup,
            ],
        }
    }
}

#[derive(Debug, Default)]
pub struct Coordinator {
    processed: ProcessedSet,
}

impl Coordinator {
    pub fn new() -> Self {
        Coordinator {
            processed: ProcessedSet::new(),
        }
    }

    pub fn handle(&mut self, request: Request) -> (Response, Option<FollowUp>) {
        match request {
            Request::GetProcessed => (Response::with_processed(self.processed.ids()), None),
            Request::ResetProcessed => {
                self.processed.reset();
                (Response::empty(), None)
            }
            Request::Keep { tab_id } => {
                let ids = self.processed.mark_processed(tab_id);
                (Response::with_processed(ids), None)
            }
            Request::Remove { tab_id } => {
                self.processed.mark_processed(tab_id);
                (Response::empty(), Some(FollowUp::CloseAndReopen { tab_id }))
            }
        }
    }
}

#[cfg(test)]
impl Coordinator {
    pub fn processed(&self) -> &ProcessedSet {
        &self.processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_processed_is_idempotent() {
        let mut coordinator = Coordinator::new();
        coordinator.handle(Request::Keep { tab_id: 3 });

        let (first, _) = coordinator.handle(Request::GetProcessed);
        let (second, _) = coordinator.handle(Request::GetProcessed);

        assert_eq!(first, second);
        assert_eq!(first.into_processed(), vec![3]);
    }

    #[test]
    fn test_keep_then_get() {
        let mut coordinator = Coordinator::new();

        let (kept, follow_up) = coordinator.handle(Request::Keep { tab_id: 1 });
        let (got, _) = coordinator.handle(Request::GetProcessed);

        assert_eq!(kept.processed, Some(vec![1]));
        assert_eq!(follow_up, None);
        assert_eq!(got.processed, Some(vec![1]));
    }

    #[test]
    fn test_remove_marks_and_requests_close() {
        let mut coordinator = Coordinator::new();

        let (response, follow_up) = coordinator.handle(Request::Remove { tab_id: 8 });

        assert_eq!(response, Response::empty());
        assert_eq!(follow_up, Some(FollowUp::CloseAndReopen { tab_id: 8 }));
        assert!(coordinator.processed().contains(8));
    }

    #[test]
    fn test_reset_clears_non_empty_set() {
        let mut coordinator = Coordinator::new();
        coordinator.handle(Request::Keep { tab_id: 1 });
        coordinator.handle(Request::Remove { tab_id: 2 });

        let (response, follow_up) = coordinator.handle(Request::ResetProcessed);

        assert_eq!(response, Response::empty());
        assert_eq!(follow_up, None);
        assert!(coordinator.processed().is_empty());
    }

    #[test]
    fn test_reset_allows_reselection() {
        use crate::operations::select_next;
        use crate::tab_data::Tab;

        let tabs = vec![Tab::new(1, "https://a", 1.0)];
        let mut coordinator = Coordinator::new();

        coordinator.handle(Request::Keep { tab_id: 1 });
        assert!(select_next(&tabs, coordinator.processed().ids(), false).is_none());

        coordinator.handle(Request::ResetProcessed);
        let processed = coordinator.processed().ids();
        assert_eq!(select_next(&tabs, processed, processed.is_empty()).map(|t| t.id), Some(1));
    }

    #[test]
    fn test_close_and_reopen_writes_flag_before_removing() {
        let steps = FollowUp::CloseAndReopen { tab_id: 1 }.steps();

        assert_eq!(
            steps,
            vec![
                ReopenStep::WriteFlag(StorageData::with_auto_reopen(true)),
                ReopenStep::RemoveTab(1),
                ReopenStep::RefocusLastWindow,
                ReopenStep::OpenPopup,
            ]
        );
    }

    #[test]
    fn test_remove_follow_up_flags_next_start_as_continuation() {
        use crate::storage::SessionStart;

        let mut coordinator = Coordinator::new();
        let (_, follow_up) = coordinator.handle(Request::Remove { tab_id: 1 });

        let written = follow_up
            .into_iter()
            .flat_map(|f| f.steps())
            .find_map(|step| match step {
                ReopenStep::WriteFlag(data) => Some(data),
                _ => None,
            })
            .unwrap();

        assert_eq!(written.session_start(), SessionStart::Continuation);
        assert_eq!(coordinator.processed().ids(), &[1]);
    }
}
