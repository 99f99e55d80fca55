//! Application error type.

use thiserror::Error;

/// Errors the windowed shell can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    WindowCreation(#[from] winit::error::OsError),
}
