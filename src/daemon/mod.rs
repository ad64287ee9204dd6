//! Countdown daemon.
//!
//! The daemon owns the single timer instance and wires its collaborators
//! together:
//! - `ipc`: Unix-socket server and request handling
//! - the tokio scheduler feeding ticks into the engine
//! - the console notifier (with optional chime) for completion alerts
//! - event logging for ticks and state changes
//!
//! Everything funnels through one `Arc<Mutex<CountdownTimer>>`, so ticks
//! and commands are processed strictly one at a time.

pub mod ipc;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::UnixStream;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

use crate::notify::ConsoleNotifier;
use crate::timer::{CountdownTimer, TimerEvent, TokioScheduler};

pub use ipc::{default_socket_path, IpcError, IpcServer, RequestHandler};

/// The daemon's concrete timer type.
pub type DaemonTimer = CountdownTimer<TokioScheduler, ConsoleNotifier>;

/// Runs the daemon until interrupted.
///
/// Binds the IPC socket (default `~/.countdown/countdown.sock`), then
/// serves commands and scheduler ticks until ctrl-c.
///
/// # Errors
///
/// Returns an error if the socket cannot be bound or the event pipeline
/// breaks.
pub async fn run(socket_path: Option<PathBuf>, no_sound: bool) -> Result<()> {
    let socket_path = match socket_path {
        Some(path) => path,
        None => default_socket_path()?,
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (scheduler, mut tick_rx) = TokioScheduler::channel();
    let notifier = build_notifier(no_sound);

    let timer: Arc<Mutex<DaemonTimer>> = Arc::new(Mutex::new(CountdownTimer::new(
        scheduler, notifier, event_tx,
    )));
    let server = IpcServer::new(&socket_path)?;
    let handler = Arc::new(RequestHandler::new(Arc::clone(&timer)));

    info!("countdown daemon listening on {}", socket_path.display());

    loop {
        tokio::select! {
            conn = server.accept() => {
                match conn {
                    Ok(stream) => {
                        let handler = Arc::clone(&handler);
                        tokio::spawn(async move {
                            handle_connection(stream, handler).await;
                        });
                    }
                    Err(e) => warn!("failed to accept connection: {}", e),
                }
            }
            Some(()) = tick_rx.recv() => {
                timer
                    .lock()
                    .await
                    .handle_tick()
                    .context("tick handling failed")?;
            }
            Some(event) = event_rx.recv() => {
                log_event(&event);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Serves a single client connection.
async fn handle_connection(
    mut stream: UnixStream,
    handler: Arc<RequestHandler<TokioScheduler, ConsoleNotifier>>,
) {
    let request = match IpcServer::receive_request(&mut stream).await {
        Ok(request) => request,
        Err(e) => {
            warn!("invalid request: {}", e);
            return;
        }
    };

    debug!(?request, "handling request");
    let response = handler.handle(request).await;

    if let Err(e) = IpcServer::send_response(&mut stream, &response).await {
        warn!("failed to send response: {}", e);
    }
}

/// Builds the completion notifier, attaching the chime player when audio
/// is available and wanted.
fn build_notifier(no_sound: bool) -> ConsoleNotifier {
    if no_sound {
        return ConsoleNotifier::new();
    }

    #[cfg(feature = "sound")]
    if let Some(player) = crate::sound::try_create_player(false) {
        return ConsoleNotifier::with_sound(player);
    }

    ConsoleNotifier::new()
}

/// Logs a timer event.
fn log_event(event: &TimerEvent) {
    match event {
        TimerEvent::Tick { remaining_seconds } => {
            debug!(remaining = remaining_seconds, "tick");
        }
        TimerEvent::StateChanged { state } => {
            info!(state = state.as_str(), "timer state changed");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::time::Duration;

    use crate::types::IpcResponse;

    fn create_temp_socket_path() -> PathBuf {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daemon_test.sock");
        std::mem::forget(dir);
        path
    }

    async fn send_raw(path: &Path, request: &[u8]) -> IpcResponse {
        let mut stream = UnixStream::connect(path).await.unwrap();
        stream.write_all(request).await.unwrap();
        stream.flush().await.unwrap();
        stream.shutdown().await.unwrap();

        let mut buffer = vec![0u8; 4096];
        let n = stream.read(&mut buffer).await.unwrap();
        serde_json::from_slice(&buffer[..n]).unwrap()
    }

    #[tokio::test]
    async fn test_daemon_serves_status() {
        let socket_path = create_temp_socket_path();
        let daemon_path = socket_path.clone();
        let daemon = tokio::spawn(async move { run(Some(daemon_path), true).await });

        // Give the daemon a moment to bind
        tokio::time::sleep(Duration::from_millis(100)).await;

        let response = send_raw(&socket_path, br#"{"command":"status"}"#).await;
        assert_eq!(response.status, "success");
        assert_eq!(response.data.unwrap().state, Some("idle".to_string()));

        daemon.abort();
    }

    #[tokio::test]
    async fn test_daemon_set_start_status_roundtrip() {
        let socket_path = create_temp_socket_path();
        let daemon_path = socket_path.clone();
        let daemon = tokio::spawn(async move { run(Some(daemon_path), true).await });

        tokio::time::sleep(Duration::from_millis(100)).await;

        let response =
            send_raw(&socket_path, br#"{"command":"set","minutes":0,"seconds":30}"#).await;
        assert_eq!(response.status, "success");

        let response = send_raw(&socket_path, br#"{"command":"start"}"#).await;
        assert_eq!(response.status, "success");
        assert_eq!(
            response.data.unwrap().state,
            Some("running".to_string())
        );

        let response = send_raw(&socket_path, br#"{"command":"reset"}"#).await;
        assert_eq!(response.status, "success");
        assert_eq!(response.data.unwrap().remaining_seconds, Some(0));

        daemon.abort();
    }

    #[test]
    fn test_build_notifier_without_sound() {
        let notifier = build_notifier(true);
        assert!(crate::notify::Notifier::is_available(&notifier));
    }
}
