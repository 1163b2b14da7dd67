//! Background tasks for generation requests and the status channel.
//!
//! Two tasks feed a single event queue so the UI applies everything in
//! arrival order: a request worker that owns the API client and serves
//! generation calls, and a listener that forwards pushed status messages
//! for the lifetime of the app.

use loreforge_core::genapi::{GenApi, GenerateRequest};
use loreforge_core::{CharacterRecord, StatusMessage};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::StreamExt;

/// Request sent from the UI to the request worker.
#[derive(Debug)]
pub enum WorkerRequest {
    /// Run a generation call against the backend.
    Generate(GenerateRequest),
}

/// Event sent from the background tasks to the UI.
#[derive(Debug)]
pub enum WorkerEvent {
    /// Generation completed with a full cast.
    Generated(Vec<CharacterRecord>),
    /// Generation failed with a user-facing message.
    GenerationFailed(String),
    /// The status channel connected.
    ChannelOpened,
    /// A status message arrived on the channel.
    ChannelStatus(StatusMessage),
    /// A message on the channel could not be decoded.
    ChannelError(String),
    /// The status channel connection ended. No reconnect is attempted.
    ChannelClosed,
}

/// Spawn the background tasks and return the channel endpoints.
///
/// The returned handle belongs to the status listener and must be aborted
/// on teardown; the request worker exits on its own when the sender drops.
pub fn spawn_worker(
    client: GenApi,
) -> (
    mpsc::Sender<WorkerRequest>,
    mpsc::Receiver<WorkerEvent>,
    JoinHandle<()>,
) {
    let (request_tx, request_rx) = mpsc::channel(8);
    let (event_tx, event_rx) = mpsc::channel(64);

    let listener_handle = tokio::spawn(listener_loop(client.clone(), event_tx.clone()));
    tokio::spawn(request_loop(client, request_rx, event_tx));

    (request_tx, event_rx, listener_handle)
}

/// Serve generation requests one at a time.
async fn request_loop(
    client: GenApi,
    mut request_rx: mpsc::Receiver<WorkerRequest>,
    event_tx: mpsc::Sender<WorkerEvent>,
) {
    while let Some(WorkerRequest::Generate(request)) = request_rx.recv().await {
        let event = match client.generate(request).await {
            Ok(response) => WorkerEvent::Generated(response.characters),
            Err(e) => WorkerEvent::GenerationFailed(e.to_string()),
        };
        if event_tx.send(event).await.is_err() {
            break;
        }
    }
}

/// Forward pushed status messages until the connection ends.
async fn listener_loop(client: GenApi, event_tx: mpsc::Sender<WorkerEvent>) {
    let mut stream = match client.status_events().await {
        Ok(stream) => stream,
        Err(e) => {
            let _ = event_tx.send(WorkerEvent::ChannelError(e.to_string())).await;
            let _ = event_tx.send(WorkerEvent::ChannelClosed).await;
            return;
        }
    };

    let _ = event_tx.send(WorkerEvent::ChannelOpened).await;

    while let Some(item) = stream.next().await {
        let event = match item {
            Ok(message) => WorkerEvent::ChannelStatus(message),
            Err(e) => WorkerEvent::ChannelError(e.to_string()),
        };
        if event_tx.send(event).await.is_err() {
            return;
        }
    }

    let _ = event_tx.send(WorkerEvent::ChannelClosed).await;
}
