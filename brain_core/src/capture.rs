//! Inbound captures pushed by external clients (browser extension,
//! share sheet) through the capture endpoint.

use serde::{Deserialize, Serialize};

use crate::types::{ItemStatus, ItemType, NewItem};

/// Title given to captures that arrive without one.
pub const DEFAULT_CAPTURE_TITLE: &str = "Note rapide";

/// JSON body accepted by `POST /api/capture`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Joins the captured text and URL into a single content string.
///
/// The URL goes after the text, separated by a blank line. With no text the
/// URL stands alone; with neither the result is empty. Only the empty string
/// counts as missing, whitespace is kept as typed.
pub fn assemble_content(text: Option<&str>, url: Option<&str>) -> String {
    let text = text.unwrap_or_default();
    match url.filter(|u| !u.is_empty()) {
        Some(url) if text.is_empty() => url.to_string(),
        Some(url) => format!("{text}\n\n{url}"),
        None => text.to_string(),
    }
}

/// Returns the capture title, or [`DEFAULT_CAPTURE_TITLE`] when blank.
pub fn capture_title(title: Option<&str>) -> String {
    match title {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => DEFAULT_CAPTURE_TITLE.to_string(),
    }
}

impl NewItem {
    /// Builds the row inserted for a capture: always `inbox`/`inbox`.
    pub fn from_capture(request: &CaptureRequest) -> Self {
        Self {
            title: capture_title(request.title.as_deref()),
            content: Some(assemble_content(
                request.text.as_deref(),
                request.url.as_deref(),
            )),
            item_type: ItemType::Inbox,
            status: ItemStatus::Inbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_only_has_no_leading_blank_line() {
        assert_eq!(
            assemble_content(None, Some("https://example.com")),
            "https://example.com",
        );
        assert_eq!(
            assemble_content(Some(""), Some("https://example.com")),
            "https://example.com",
        );
    }

    #[test]
    fn test_text_and_url_joined_by_blank_line() {
        assert_eq!(
            assemble_content(Some("read later"), Some("https://example.com")),
            "read later\n\nhttps://example.com",
        );
    }

    #[test]
    fn test_text_only_and_nothing() {
        assert_eq!(assemble_content(Some("just text"), None), "just text");
        assert_eq!(assemble_content(Some("just text"), Some("")), "just text");
        assert_eq!(assemble_content(None, None), "");
    }

    #[test]
    fn test_blank_title_uses_placeholder() {
        assert_eq!(capture_title(None), DEFAULT_CAPTURE_TITLE);
        assert_eq!(capture_title(Some("")), DEFAULT_CAPTURE_TITLE);
        assert_eq!(capture_title(Some("   ")), DEFAULT_CAPTURE_TITLE);
        assert_eq!(capture_title(Some("Buy milk")), "Buy milk");
    }

    #[test]
    fn test_from_capture_title_only() {
        let request = CaptureRequest {
            title: Some("Buy milk".to_string()),
            ..Default::default()
        };

        let item = NewItem::from_capture(&request);
        assert_eq!(item.title, "Buy milk");
        assert_eq!(item.content.as_deref(), Some(""));
        assert_eq!(item.item_type, ItemType::Inbox);
        assert_eq!(item.status, ItemStatus::Inbox);
    }

    #[test]
    fn test_capture_request_accepts_partial_json() {
        let request: CaptureRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(request.title, None);
        assert_eq!(request.url.as_deref(), Some("https://example.com"));

        assert!(serde_json::from_str::<CaptureRequest>(r#"{"title": 5}"#).is_err());
    }
}
