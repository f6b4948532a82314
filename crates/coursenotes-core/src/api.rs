//! Notes server client.
//!
//! The only write the page performs: `POST /update_note/{id}` with
//! `{"note": text}`. The server answers `{"success": bool}` and may add an
//! `error` string when it refuses. No timeout and no retry are applied.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::config::{normalize_base_url, ClientConfig};
use crate::models::NoteId;
use crate::{Error, Result};

/// Longest server-provided reason carried into an alert.
const MAX_REASON_CHARS: usize = 180;

/// Persists edited note text.
pub trait NoteUpdater {
    fn update_note(&self, id: NoteId, text: &str) -> impl Future<Output = Result<()>> + Send;
}

#[derive(Debug, Serialize)]
struct UpdateNoteRequest<'a> {
    note: &'a str,
}

#[derive(Debug, Deserialize)]
struct UpdateNoteResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the notes server.
#[derive(Debug, Clone)]
pub struct NotesApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl NotesApiClient {
    /// Builds a client for an explicit server base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| Error::Transport(format!("Failed to construct HTTP client: {error}")))?;
        Ok(Self { base_url, client })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config.api_base_url.clone())
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn update_url(&self, id: NoteId) -> String {
        format!("{}/update_note/{id}", self.base_url)
    }
}

impl NoteUpdater for NotesApiClient {
    async fn update_note(&self, id: NoteId, text: &str) -> Result<()> {
        let response = self
            .client
            .post(self.update_url(id))
            .header("Accept", "application/json")
            .json(&UpdateNoteRequest { note: text })
            .send()
            .await
            .map_err(|error| Error::Transport(format!("Update request failed: {error}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Rejected {
                status: status.as_u16(),
                reason: rejection_reason(&body),
            });
        }

        let payload = response
            .json::<UpdateNoteResponse>()
            .await
            .map_err(|error| Error::Transport(format!("Failed to parse update response: {error}")))?;

        if payload.success {
            Ok(())
        } else {
            Err(Error::Rejected {
                status: status.as_u16(),
                reason: payload
                    .error
                    .as_deref()
                    .map_or_else(|| "server reported failure".to_string(), rejection_reason),
            })
        }
    }
}

/// Servers may answer a refusal with a full HTML error page.
fn rejection_reason(body: &str) -> String {
    body.trim().chars().take(MAX_REASON_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_url_addresses_note() {
        let client = NotesApiClient::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
        assert_eq!(
            client.update_url(NoteId::new(12)),
            "http://127.0.0.1:5000/update_note/12"
        );
    }

    #[test]
    fn request_body_carries_note_field() {
        let body = serde_json::to_value(UpdateNoteRequest { note: "Updated note" }).unwrap();
        assert_eq!(body, serde_json::json!({ "note": "Updated note" }));
    }

    #[test]
    fn response_error_field_is_optional() {
        let ok: UpdateNoteResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.error, None);

        let failed: UpdateNoteResponse =
            serde_json::from_str(r#"{"success": false, "error": "404 Not Found"}"#).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("404 Not Found"));
    }

    #[test]
    fn html_error_page_is_cut_to_reason_length() {
        let page = format!("<html><body>{}</body></html>", "Internal Server Error ".repeat(40));
        let reason = rejection_reason(&page);
        assert_eq!(reason.chars().count(), MAX_REASON_CHARS);
        assert!(reason.starts_with("<html><body>Internal Server Error"));
    }

    #[test]
    fn short_reason_is_trimmed_not_cut() {
        assert_eq!(rejection_reason("\n  404 Not Found \n"), "404 Not Found");
    }

    #[test]
    fn reason_cut_keeps_multibyte_chars_whole() {
        let body = "é".repeat(MAX_REASON_CHARS + 20);
        assert_eq!(rejection_reason(&body), "é".repeat(MAX_REASON_CHARS));
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(NotesApiClient::new("").is_err());
        assert!(NotesApiClient::new("localhost:5000").is_err());
    }
}
