// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide log sink lifecycle.
//!
//! One append-mode log file plus a colorized console mirror, installed as
//! the global `tracing` subscriber. The file writer is non-blocking so
//! the diagnostic path stays best-effort; the returned guard flushes the
//! worker when it drops, which is the process-exit hook.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Errors from installing the process-wide log sink.
#[derive(Debug, Error)]
pub enum LogInitError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file: {0}")]
    Open(#[from] io::Error),

    /// Some other global subscriber was installed first.
    #[error("a global logging subscriber is already installed")]
    AlreadyInstalled,
}

/// Keeps the non-blocking file writer alive; dropping it flushes all
/// pending log lines and writes the session-end line.
pub struct LogGuard {
    _file_guard: WorkerGuard,
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        // Emitted before the worker guard drops, so it still reaches the
        // file.
        tracing::info!("log sink closed");
    }
}

/// Opens the log file in append mode and installs the global subscriber:
/// ANSI-colorized console on stderr, plain timestamped lines in the file.
///
/// Call once per process; the sink stays installed for the process
/// lifetime, the returned [`LogGuard`] only controls flushing.
///
/// # Errors
///
/// [`LogInitError::Open`] when the file cannot be opened,
/// [`LogInitError::AlreadyInstalled`] when a global subscriber exists.
pub fn init(path: impl AsRef<Path>) -> Result<LogGuard, LogInitError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let (file_writer, file_guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(fmt::layer().with_ansi(true).with_writer(io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(|_| LogInitError::AlreadyInstalled)?;

    tracing::info!("log sink opened");
    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
