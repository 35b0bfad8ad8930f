//! Remote fetch collaborator
//!
//! Thin typed client for the note service's pages-list endpoint: one
//! authenticated GET, no retry, no pagination. Failures surface with the
//! HTTP status and a body excerpt and abort the export step only.

use std::io;

use serde::Deserialize;

/// Filter the service expects: embed each note's collection, newest first
const PAGES_FILTER: &str = r#"{"include":"collection","order":"publish DESC"}"#;

/// Longest response-body excerpt carried into an error message
const ERROR_BODY_EXCERPT: usize = 500;

/// Collection reference embedded in a remote note
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCollection {
    #[serde(default)]
    pub title: Option<String>,
}

/// One note as served by the pages-list endpoint
///
/// Every field is optional on the wire; absent values become empty strings
/// in the exported document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteNote {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publish: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub hid: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub collection: Option<RemoteCollection>,
}

#[derive(Debug, Deserialize)]
struct PagesResponse {
    #[serde(default)]
    pages: Vec<RemoteNote>,
}

/// Blocking client for the pages-list endpoint
pub struct NotesApi {
    url: String,
    token: String,
    app_key: String,
    client: reqwest::blocking::Client,
}

impl NotesApi {
    pub fn new(url: &str, token: &str, app_key: &str) -> Self {
        Self {
            url: url.to_string(),
            token: token.to_string(),
            app_key: app_key.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Fetch every note from the service
    pub fn fetch_pages(&self) -> io::Result<Vec<RemoteNote>> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("appKey", self.app_key.as_str()), ("filter", PAGES_FILTER)])
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| fetch_error(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let excerpt: String = body.chars().take(ERROR_BODY_EXCERPT).collect();
            return Err(fetch_error(format!("HTTP {}: {}", status, excerpt)));
        }

        let payload: PagesResponse = response
            .json()
            .map_err(|e| fetch_error(format!("invalid response body: {}", e)))?;

        Ok(payload.pages)
    }
}

fn fetch_error(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("fetching notes: {}", message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_note() {
        // Double-hash delimiters: the color value starts with `"#`
        let json = r##"{
            "pages": [{
                "title": "Hope",
                "subtitle": "A Study",
                "author": "Jane",
                "publish": "2024-05-01T08:00:00Z",
                "created": "2024-04-28T10:00:00Z",
                "updated": "2024-04-30T11:00:00Z",
                "id": "0a1b2c",
                "hid": "h-123",
                "color": "#5B4336",
                "content": "# Hope\n\nBody",
                "collection": { "title": "Devotionals" }
            }]
        }"##;

        let payload: PagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(payload.pages.len(), 1);
        let note = &payload.pages[0];
        assert_eq!(note.title.as_deref(), Some("Hope"));
        assert_eq!(note.publish.as_deref(), Some("2024-05-01T08:00:00Z"));
        assert_eq!(note.color.as_deref(), Some("#5B4336"));
        assert_eq!(note.content.as_deref(), Some("# Hope\n\nBody"));
        assert_eq!(
            note.collection.as_ref().and_then(|c| c.title.as_deref()),
            Some("Devotionals")
        );
    }

    #[test]
    fn test_deserialize_minimal_note() {
        let payload: PagesResponse = serde_json::from_str(r#"{"pages": [{}]}"#).unwrap();
        let note = &payload.pages[0];
        assert!(note.title.is_none());
        assert!(note.content.is_none());
        assert!(note.collection.is_none());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"pages": [{"title": "Kept", "ranking": 4, "flags": ["a"]}]}"#;
        let payload: PagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(payload.pages[0].title.as_deref(), Some("Kept"));
    }

    #[test]
    fn test_deserialize_missing_pages_key() {
        let payload: PagesResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.pages.is_empty());
    }
}
