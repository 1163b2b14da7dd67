//! Minimal client for the character generation API.
//!
//! This crate provides a focused client for the generation backend with:
//! - One-shot cast generation requests
//! - A persistent status-event stream with buffered SSE parsing
//! - Wire types shared with the rest of the workspace

use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use thiserror::Error;
use tokio_stream::Stream;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const GENERATE_PATH: &str = "/api/generate";
const EVENTS_PATH: &str = "/api/events";

/// Errors that can occur when talking to the generation backend.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API key not configured")]
    NoApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Generation API client.
#[derive(Clone)]
pub struct GenApi {
    client: reqwest::Client,
    base_url: String,
}

impl Default for GenApi {
    fn default() -> Self {
        Self::new()
    }
}

impl GenApi {
    /// Create a client pointed at the default local backend.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client using the GENAPI_URL environment variable when set.
    pub fn from_env() -> Self {
        match std::env::var("GENAPI_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new().with_base_url(url),
            _ => Self::new(),
        }
    }

    /// Override the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Base URL this client is pointed at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a generation request and return the full cast.
    ///
    /// Non-2xx responses surface the backend's `error` field when present,
    /// or a generic message otherwise.
    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, Error> {
        let response = self
            .client
            .post(format!("{}{GENERATE_PATH}", self.base_url))
            .headers(self.build_headers())
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| "Generation failed".to_string());
            return Err(Error::Api { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))
    }

    /// Open the persistent status-event stream.
    ///
    /// Events arrive as SSE-framed JSON payloads. The stream ends when the
    /// backend closes the connection; no reconnection is attempted.
    pub async fn status_events(
        &self,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<StatusMessage, Error>> + Send>>, Error> {
        let response = self
            .client
            .get(format!("{}{EVENTS_PATH}", self.base_url))
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        // Use scan to maintain a buffer for incomplete SSE events across chunks
        let stream = response
            .bytes_stream()
            .scan(String::new(), |buffer, result| {
                let events = match result {
                    Ok(bytes) => {
                        buffer.push_str(&String::from_utf8_lossy(&bytes));
                        parse_status_events_buffered(buffer)
                    }
                    Err(e) => vec![Err(Error::Network(e.to_string()))],
                };
                futures::future::ready(Some(events))
            })
            .flat_map(futures::stream::iter);

        Ok(Box::pin(stream))
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// A cast generation request.
///
/// Field names follow the backend's JSON contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub api_key: String,
    pub lore_text: String,
    /// Newline-joined cleaned names.
    pub names_text: String,
    pub num_characters: u8,
    pub temperature: f32,
}

/// A successful generation response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub characters: Vec<CharacterRecord>,
}

/// One generated character profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub knowledge: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Vec<RelationshipEdge>>,
}

/// A declared relationship to another character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    /// Target character name.
    pub name: String,
    /// Short relationship label.
    pub relationship: String,
    /// Sentence-delimited free text.
    #[serde(default)]
    pub details: String,
}

/// A tagged status event from the push channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProgressEvent {
    /// Progress percentage (0-100) and the current step.
    Progress { progress: f64, step: String },
    /// A log line to append to the activity history.
    Log { message: String },
}

/// An inbound channel payload in any of its accepted shapes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatusMessage {
    Event(ProgressEvent),
    Text(String),
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Parse status events from a buffer, consuming complete events and leaving
/// incomplete data.
///
/// SSE data lines are terminated by newlines. This function parses complete
/// `data:` lines, removes them from the buffer, and leaves any incomplete
/// event data for the next chunk.
fn parse_status_events_buffered(buffer: &mut String) -> Vec<Result<StatusMessage, Error>> {
    let mut events = Vec::new();

    loop {
        let Some(newline_pos) = buffer.find('\n') else {
            // No complete line yet, wait for more data
            break;
        };

        let line = &buffer[..newline_pos];

        if let Some(json_str) = line.strip_prefix("data: ") {
            if !json_str.is_empty() {
                match serde_json::from_str::<StatusMessage>(json_str) {
                    Ok(message) => events.push(Ok(message)),
                    Err(e) => {
                        // Incomplete JSON at a chunk boundary: hold the line
                        // until more data arrives
                        if e.is_eof() {
                            break;
                        }
                        events.push(Err(Error::Parse(format!("event parse error: {e}"))));
                    }
                }
            }
        }
        // Skip event: lines, empty lines, and other SSE metadata

        buffer.drain(..=newline_pos);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults() {
        let client = GenApi::new();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_base_url() {
        let client = GenApi::new().with_base_url("http://localhost:9001/");
        assert_eq!(client.base_url(), "http://localhost:9001");
    }

    #[test]
    fn test_request_serializes_with_backend_field_names() {
        let request = GenerateRequest {
            api_key: "key".to_string(),
            lore_text: "Ancient empire of glass.".to_string(),
            names_text: "Alice\nBob".to_string(),
            num_characters: 2,
            temperature: 0.7,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["apiKey"], "key");
        assert_eq!(value["loreText"], "Ancient empire of glass.");
        assert_eq!(value["namesText"], "Alice\nBob");
        assert_eq!(value["numCharacters"], 2);
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_character_record_without_relationships() {
        let record: CharacterRecord = serde_json::from_str(
            r#"{"name":"Alice","bio":["A wanderer."],"knowledge":[]}"#,
        )
        .unwrap();
        assert_eq!(record.name, "Alice");
        assert!(record.relationships.is_none());
    }

    #[test]
    fn test_status_message_shapes() {
        let progress: StatusMessage =
            serde_json::from_str(r#"{"type":"progress","progress":42,"step":"Analyzing lore"}"#)
                .unwrap();
        assert_eq!(
            progress,
            StatusMessage::Event(ProgressEvent::Progress {
                progress: 42.0,
                step: "Analyzing lore".to_string()
            })
        );

        let log: StatusMessage = serde_json::from_str(r#"{"type":"log","message":"ok"}"#).unwrap();
        assert_eq!(
            log,
            StatusMessage::Event(ProgressEvent::Log {
                message: "ok".to_string()
            })
        );

        let text: StatusMessage = serde_json::from_str(r#""plain line""#).unwrap();
        assert_eq!(text, StatusMessage::Text("plain line".to_string()));

        let other: StatusMessage = serde_json::from_str(r#"{"weird":true}"#).unwrap();
        assert!(matches!(other, StatusMessage::Other(_)));
    }

    #[test]
    fn test_buffered_parsing_across_chunks() {
        let mut buffer = String::from("data: {\"type\":\"log\",\"mes");
        let events = parse_status_events_buffered(&mut buffer);
        assert!(events.is_empty());
        assert!(!buffer.is_empty());

        buffer.push_str("sage\":\"ok\"}\ndata: \"done\"\n");
        let events = parse_status_events_buffered(&mut buffer);
        assert_eq!(events.len(), 2);
        assert!(buffer.is_empty());

        assert_eq!(
            events[0].as_ref().unwrap(),
            &StatusMessage::Event(ProgressEvent::Log {
                message: "ok".to_string()
            })
        );
        assert_eq!(
            events[1].as_ref().unwrap(),
            &StatusMessage::Text("done".to_string())
        );
    }

    #[test]
    fn test_buffered_parsing_skips_metadata_lines() {
        let mut buffer = String::from("event: status\n\ndata: \"hello\"\n");
        let events = parse_status_events_buffered(&mut buffer);
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].as_ref().unwrap(),
            &StatusMessage::Text("hello".to_string())
        );
    }

    #[test]
    fn test_buffered_parsing_reports_malformed_payload() {
        let mut buffer = String::from("data: {not json}\n");
        let events = parse_status_events_buffered(&mut buffer);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], Err(Error::Parse(_))));
        assert!(buffer.is_empty());
    }
}
