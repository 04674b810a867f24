//! The session log.
//!
//! Every event in the server funnels through [`Log`]: one structured
//! line is appended to the log file, and a rejected request additionally
//! carries a terse status line back to the client before its worker
//! gives up. This is the only place where client-visible error behavior
//! meets the process lifecycle.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::http::session::Session;
use crate::http::status::{Outcome, StatusRecord};

/// Timestamp layout for log entries (UTC).
const LOG_TIME: &str = "%Y-%m-%d %H:%M:%S";

/// Handle to the append-only log sink.
///
/// Cloning is cheap; every worker carries one. Each record is written
/// with a single open-append-write-close cycle so concurrent workers
/// never interleave bytes within a line.
#[derive(Clone)]
pub struct Log {
    path: Arc<PathBuf>,
}

impl Log {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// Record a normal event for a session; the worker continues.
    pub async fn info(&self, outcome: Outcome, session: &Session) {
        self.append(&session_entry(outcome.status(), session)).await;
    }

    /// Record a rejected request: notify the client, then log. Called
    /// once per rejection; the worker terminates right after.
    pub async fn warn(&self, outcome: Outcome, session: &mut Session, message: &str) {
        let status = outcome.status();

        let notice = format!("cloth says: {} {}\r", status.http, message);
        if let Err(e) = session.socket.write_all(notice.as_bytes()).await {
            // The peer may already be gone; the log entry still counts.
            tracing::debug!(error = %e, "failed to notify client");
        }

        self.append(&session_entry(status, session)).await;
    }

    /// Record an unrecoverable server failure. Never writes to a socket;
    /// the caller terminates the server.
    pub async fn fatal(&self, message: &str, code: i32) {
        let status = Outcome::Fatal.status();
        self.append(&format!("{}: {} ({})", status.tag, message, code))
            .await;
    }

    async fn append(&self, line: &str) {
        let result = async {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.path.as_ref())
                .await?;
            // One write per record; appends never interleave mid-line.
            file.write_all(format!("{line}\n").as_bytes()).await
        }
        .await;

        if let Err(e) = result {
            tracing::warn!(error = %e, path = %self.path.display(), "log append failed");
        }
    }
}

/// Format one session record:
/// `<tag>: <resource> <host> <figure> <addr>:<port> (<time>)`.
pub fn session_entry(status: &StatusRecord, session: &Session) -> String {
    format!(
        "{}: {} {} {} {}:{} ({})",
        status.tag,
        session.resource(),
        session.host(),
        status.figure,
        session.remote_addr,
        session.remote_port,
        Utc::now().format(LOG_TIME),
    )
}
