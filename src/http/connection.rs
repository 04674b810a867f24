use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use bytes::BytesMut;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::mime;
use crate::http::parser;
use crate::http::session::Session;
use crate::http::status::Outcome;
use crate::log::Log;

/// Request and stream buffer cap. A request that fills the buffer
/// exactly is treated as truncated and rejected.
const BUFSIZE: usize = 8096;

/// Why a connection was turned away. Carried up the pipeline with `?`
/// and handed to the logger exactly once.
#[derive(Debug)]
pub struct Rejection {
    pub outcome: Outcome,
    pub message: &'static str,
}

impl Rejection {
    fn new(outcome: Outcome, message: &'static str) -> Self {
        Self { outcome, message }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.outcome.status().http)
    }
}

impl std::error::Error for Rejection {}

/// One worker per accepted connection.
///
/// The worker exclusively owns its session and socket; nothing is shared
/// with other connections except the log sink. It serves at most one
/// request and terminates either way.
pub struct Connection {
    session: Session,
    root: PathBuf,
    log: Log,
}

impl Connection {
    pub fn new(socket: TcpStream, peer: SocketAddr, root: PathBuf, log: Log) -> Self {
        Self {
            session: Session::new(socket, peer),
            root,
            log,
        }
    }

    /// Drive the connection to completion. A rejection is reported to
    /// the client and the log here, then returned so the acceptor sees a
    /// distinguished failure result.
    pub async fn run(mut self) -> Result<(), Rejection> {
        match self.serve().await {
            Ok(()) => Ok(()),
            Err(rejection) => {
                self.log
                    .warn(rejection.outcome, &mut self.session, rejection.message)
                    .await;
                Err(rejection)
            }
        }
    }

    /// The pipeline: receive, parse, gate, open, stream. Stops at the
    /// first unmet condition.
    async fn serve(&mut self) -> Result<(), Rejection> {
        let raw = self.receive().await?;

        self.session.absorb(parser::parse(&raw));
        self.log.info(Outcome::Accept, &self.session).await;

        let resource = self.validate()?;

        let filetype = mime::resolve(&resource).ok_or_else(|| {
            Rejection::new(Outcome::NoMethod, "file extension type not supported")
        })?;

        // "GET /" is stripped before the open; what remains is relative
        // to the serving root.
        let target = resource.get(5..).unwrap_or_default();
        let file = File::open(self.root.join(target))
            .await
            .map_err(|_| Rejection::new(Outcome::Error, "failed to open file"))?;

        self.log.info(Outcome::Response, &self.session).await;

        if let Err(e) = self.respond(file, filetype).await {
            // The peer vanished mid-stream; there is no one to notify.
            tracing::debug!(error = %e, "response stream aborted");
        }
        Ok(())
    }

    /// One bounded read. Zero bytes or an error means the request never
    /// arrived; a read that fills the buffer exactly may be truncated.
    async fn receive(&mut self) -> Result<BytesMut, Rejection> {
        let mut buffer = BytesMut::zeroed(BUFSIZE);

        match self.session.socket.read(&mut buffer).await {
            Err(_) | Ok(0) => Err(Rejection::new(
                Outcome::BadRequest,
                "failed to read browser request",
            )),
            Ok(n) if n == BUFSIZE => {
                Err(Rejection::new(Outcome::Overflow, "oversized browser request"))
            }
            Ok(n) => {
                buffer.truncate(n);
                Ok(buffer)
            }
        }
    }

    /// Method gate, truncation, traversal gate, default document. Leaves
    /// the session's resource in its final, truncated form.
    fn validate(&mut self) -> Result<String, Rejection> {
        let raw = self.session.resource().to_string();

        let method_ok = raw
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("GET "));
        if !method_ok {
            return Err(Rejection::new(
                Outcome::BadMethod,
                "Only simple GET operation supported",
            ));
        }

        // The path ends at the first space after the method; the version
        // token and anything after it are discarded.
        let mut resource = match raw[4..].find(' ') {
            Some(end) => raw[..4 + end].to_string(),
            None => raw,
        };

        if resource.contains("..") {
            return Err(Rejection::new(
                Outcome::BadRequest,
                "Relative pathnames not supported",
            ));
        }

        // In the absence of an explicit filename, default to index.html.
        if resource.eq_ignore_ascii_case("GET /") {
            resource = "GET /index.html".to_string();
        }

        self.session.resource = Some(resource.clone());
        Ok(resource)
    }

    /// Fixed status line plus `Content-Type`, then the file streamed in
    /// `BUFSIZE` chunks until end of file. No `Content-Length`; closing
    /// the connection ends the response.
    async fn respond(&mut self, mut file: File, filetype: &str) -> std::io::Result<()> {
        let header = format!("HTTP/1.0 200 OK\r\nContent-Type: {filetype}\r\n\r\n");
        self.session.socket.write_all(header.as_bytes()).await?;

        let mut chunk = BytesMut::zeroed(BUFSIZE);
        loop {
            let n = file.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            self.session.socket.write_all(&chunk[..n]).await?;
        }
        self.session.socket.flush().await
    }
}
