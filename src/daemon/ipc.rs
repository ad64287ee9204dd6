//! IPC server for the countdown daemon.
//!
//! This module provides Unix Domain Socket IPC functionality:
//! - Server that listens on a Unix socket
//! - Request/response handling for timer commands
//! - Integration with the countdown engine for command execution

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::Mutex;
use tokio::time::{timeout, Duration};

use crate::notify::Notifier;
use crate::timer::{CountdownTimer, Scheduler, TimerDuration};
use crate::types::{IpcRequest, IpcResponse, ResponseData, SetParams};

// ============================================================================
// Constants
// ============================================================================

/// Socket path under the home directory
const SOCKET_RELATIVE_PATH: &str = ".countdown/countdown.sock";

/// Maximum request size in bytes (4KB)
const MAX_REQUEST_SIZE: usize = 4096;

/// Read timeout in seconds
const READ_TIMEOUT_SECS: u64 = 5;

/// Returns the default daemon socket path (`~/.countdown/countdown.sock`).
///
/// # Errors
///
/// Fails when the home directory cannot be determined.
pub fn default_socket_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine the home directory")?;
    Ok(home.join(SOCKET_RELATIVE_PATH))
}

// ============================================================================
// IpcError
// ============================================================================

/// IPC-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    /// Socket binding error
    #[error("failed to bind socket: {0}")]
    BindError(String),

    /// Read error
    #[error("failed to read request: {0}")]
    ReadError(String),

    /// Write error
    #[error("failed to write response: {0}")]
    WriteError(String),

    /// Timeout error
    #[error("operation timed out")]
    Timeout,

    /// Request too large
    #[error("request too large (max {MAX_REQUEST_SIZE} bytes)")]
    RequestTooLarge,
}

// ============================================================================
// IpcServer
// ============================================================================

/// Unix Domain Socket IPC server.
pub struct IpcServer {
    /// Unix socket listener
    listener: UnixListener,
    /// Socket path (for cleanup)
    socket_path: PathBuf,
}

impl IpcServer {
    /// Creates a new IPC server bound to the specified socket path.
    ///
    /// If the socket file already exists, it will be removed before
    /// binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket cannot be bound.
    pub fn new(socket_path: &Path) -> Result<Self> {
        // Remove existing socket file if present
        if socket_path.exists() {
            std::fs::remove_file(socket_path)
                .with_context(|| format!("failed to remove existing socket: {:?}", socket_path))?;
        }

        // Ensure parent directory exists
        if let Some(parent) = socket_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create socket directory: {:?}", parent))?;
        }

        let listener = UnixListener::bind(socket_path)
            .with_context(|| format!("failed to bind Unix socket: {:?}", socket_path))?;

        Ok(Self {
            listener,
            socket_path: socket_path.to_path_buf(),
        })
    }

    /// Accepts an incoming client connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be accepted.
    pub async fn accept(&self) -> Result<UnixStream> {
        let (stream, _addr) = self
            .listener
            .accept()
            .await
            .context("failed to accept connection")?;
        Ok(stream)
    }

    /// Receives and deserializes an IPC request from the stream.
    ///
    /// Applies a read timeout to prevent blocking indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or deserialization fails.
    pub async fn receive_request(stream: &mut UnixStream) -> Result<IpcRequest> {
        let mut buffer = vec![0u8; MAX_REQUEST_SIZE];

        let read_result = timeout(
            Duration::from_secs(READ_TIMEOUT_SECS),
            stream.read(&mut buffer),
        )
        .await;

        let n = match read_result {
            Ok(Ok(n)) => n,
            Ok(Err(e)) => return Err(IpcError::ReadError(e.to_string()).into()),
            Err(_) => return Err(IpcError::Timeout.into()),
        };

        if n == 0 {
            anyhow::bail!("connection closed by client");
        }

        let request: IpcRequest = serde_json::from_slice(&buffer[..n])
            .with_context(|| "failed to deserialize IPC request")?;

        Ok(request)
    }

    /// Serializes and sends an IPC response to the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub async fn send_response(stream: &mut UnixStream, response: &IpcResponse) -> Result<()> {
        let json = serde_json::to_vec(response).context("failed to serialize IPC response")?;

        stream
            .write_all(&json)
            .await
            .context("failed to write response")?;
        stream.flush().await.context("failed to flush response")?;

        Ok(())
    }

    /// Returns the socket path.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }
}

impl Drop for IpcServer {
    fn drop(&mut self) {
        // Clean up socket file on drop
        let _ = std::fs::remove_file(&self.socket_path);
    }
}

// ============================================================================
// RequestHandler
// ============================================================================

/// Handles IPC requests by dispatching to the countdown engine.
pub struct RequestHandler<S: Scheduler, N: Notifier> {
    /// Shared reference to the timer engine
    timer: Arc<Mutex<CountdownTimer<S, N>>>,
}

impl<S: Scheduler, N: Notifier> RequestHandler<S, N> {
    /// Creates a new request handler with the given timer.
    pub fn new(timer: Arc<Mutex<CountdownTimer<S, N>>>) -> Self {
        Self { timer }
    }

    /// Handles an IPC request and returns the appropriate response.
    pub async fn handle(&self, request: IpcRequest) -> IpcResponse {
        match request {
            IpcRequest::Set { params } => self.handle_set(params).await,
            IpcRequest::Start => self.handle_start().await,
            IpcRequest::Pause => self.handle_pause().await,
            IpcRequest::Reset => self.handle_reset().await,
            IpcRequest::Status => self.handle_status().await,
        }
    }

    /// Handles the set command.
    async fn handle_set(&self, params: SetParams) -> IpcResponse {
        let duration = match TimerDuration::new(params.minutes, params.seconds) {
            Ok(duration) => duration,
            Err(e) => return IpcResponse::error(e.to_string()),
        };

        let mut timer = self.timer.lock().await;
        match timer.configure(duration) {
            Ok(()) => IpcResponse::success(
                "Duration set",
                Some(ResponseData::from_countdown(timer.snapshot())),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the start command.
    async fn handle_start(&self) -> IpcResponse {
        let mut timer = self.timer.lock().await;
        match timer.start() {
            Ok(()) => IpcResponse::success(
                "Countdown started",
                Some(ResponseData::from_countdown(timer.snapshot())),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the pause command.
    async fn handle_pause(&self) -> IpcResponse {
        let mut timer = self.timer.lock().await;
        match timer.pause() {
            Ok(()) => IpcResponse::success(
                "Countdown paused",
                Some(ResponseData::from_countdown(timer.snapshot())),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the reset command.
    async fn handle_reset(&self) -> IpcResponse {
        let mut timer = self.timer.lock().await;
        match timer.reset() {
            Ok(()) => IpcResponse::success(
                "Timer reset",
                Some(ResponseData::from_countdown(timer.snapshot())),
            ),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the status command.
    async fn handle_status(&self) -> IpcResponse {
        let timer = self.timer.lock().await;
        IpcResponse::success("", Some(ResponseData::from_countdown(timer.snapshot())))
    }
}

// ============================================================================
// Tests
// ============================================================================
