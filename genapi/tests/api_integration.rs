//! Integration tests that call a real generation backend.
//!
//! These tests require a backend running at GENAPI_URL (or the default
//! http://127.0.0.1:8000) and GENAPI_KEY set (via .env file or environment).
//! Run with: `cargo test -p genapi --test api_integration -- --ignored`
//!
//! These are marked #[ignore] by default to avoid:
//! - Test failures when no backend is available
//! - Slow test runs (generation takes seconds)

use genapi::{GenApi, GenerateRequest};
use tokio_stream::StreamExt;

/// Load environment variables from .env file
fn setup() {
    let _ = dotenvy::dotenv();
}

/// Check if an API key is available
fn api_key() -> Option<String> {
    std::env::var("GENAPI_KEY").ok()
}

#[tokio::test]
#[ignore] // Run with: cargo test -p genapi --test api_integration -- --ignored
async fn test_generate_returns_requested_cast_size() {
    setup();
    let Some(key) = api_key() else {
        eprintln!("Skipping test: GENAPI_KEY not set");
        return;
    };

    let client = GenApi::from_env();
    let response = client
        .generate(GenerateRequest {
            api_key: key,
            lore_text: "A city of glassblowers ruled by a silent guild.".to_string(),
            names_text: "Mira\nOren".to_string(),
            num_characters: 2,
            temperature: 0.7,
        })
        .await
        .expect("backend should respond");

    assert_eq!(response.characters.len(), 2);
    for character in &response.characters {
        assert!(!character.name.is_empty());
    }
}

#[tokio::test]
#[ignore]
async fn test_status_channel_delivers_events_during_generation() {
    setup();
    let Some(key) = api_key() else {
        eprintln!("Skipping test: GENAPI_KEY not set");
        return;
    };

    let client = GenApi::from_env();
    let mut stream = client
        .status_events()
        .await
        .expect("status channel should connect");

    let generation = tokio::spawn({
        let client = client.clone();
        async move {
            client
                .generate(GenerateRequest {
                    api_key: key,
                    lore_text: "A lighthouse at the edge of a dead sea.".to_string(),
                    names_text: "Keeper".to_string(),
                    num_characters: 1,
                    temperature: 0.5,
                })
                .await
        }
    });

    // At least one status message should arrive while the backend works
    let first = tokio::time::timeout(std::time::Duration::from_secs(60), stream.next())
        .await
        .expect("expected a status event before timeout");
    assert!(first.is_some());

    let response = generation.await.expect("task should not panic");
    assert!(response.is_ok());
}
