/// Messages exchanged between the popup and the background worker
use crate::tab_data::TabId;
use serde::{Deserialize, Serialize};

/// A popup request, tagged by `type` on the wire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Request {
    GetProcessed,
    ResetProcessed,
    Keep {
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },
    Remove {
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },
}

/// Background reply. `processed` is omitted for requests that don't report it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed: Option<Vec<TabId>>,
}

impl Response {
    pub fn empty() -> Self {
        Response { processed: None }
    }

    pub fn with_processed(ids: &[TabId]) -> Self {
        Response {
            processed: Some(ids.to_vec()),
        }
    }

    /// Processed ids, or an empty list when the reply carried none
    pub fn into_processed(self) -> Vec<TabId> {
        self.processed.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_tags() {
        assert_eq!(serde_json::to_value(Request::GetProcessed).unwrap(), json!({"type": "getProcessed"}));
        assert_eq!(serde_json::to_value(Request::ResetProcessed).unwrap(), json!({"type": "resetProcessed"}));
        assert_eq!(
            serde_json::to_value(Request::Keep { tab_id: 12 }).unwrap(),
            json!({"type": "keep", "tabId": 12})
        );
        assert_eq!(
            serde_json::to_value(Request::Remove { tab_id: 4 }).unwrap(),
            json!({"type": "remove", "tabId": 4})
        );
    }

    #[test]
    fn test_request_from_js_message() {
        let request: Request = serde_json::from_value(json!({"type": "remove", "tabId": 31})).unwrap();
        assert_eq!(request, Request::Remove { tab_id: 31 });
    }

    #[test]
    fn test_unknown_request_is_rejected() {
        assert!(serde_json::from_value::<Request>(json!({"type": "snooze", "tabId": 1})).is_err());
        assert!(serde_json::from_value::<Request>(json!({"type": "keep"})).is_err());
    }

    #[test]
    fn test_response_shapes() {
        assert_eq!(serde_json::to_value(Response::empty()).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(Response::with_processed(&[1, 2])).unwrap(),
            json!({"processed": [1, 2]})
        );
    }

    #[test]
    fn test_missing_processed_defaults_to_empty() {
        let response: Response = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_processed(), Vec::<TabId>::new());
    }
}
