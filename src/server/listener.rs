use std::io;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::log::Log;

/// Listen backlog.
const BACKLOG: u32 = 64;

/// The accept loop. Bind, listen, and accept failures are the only
/// fatal errors in the server: each is logged and returned to `main`,
/// which exits. Everything after accept belongs to a worker.
pub async fn run(cfg: &Config, log: &Log) -> Result<()> {
    let listener = match bind(&cfg.listen_addr) {
        Ok(listener) => listener,
        Err(e) => {
            log.fatal("system call: bind", os_code(&e)).await;
            return Err(e).context("binding listen socket");
        }
    };
    info!("Listening on {}", cfg.listen_addr);

    let mut hit: u64 = 0;
    loop {
        // The peer address is returned by value; each worker keeps its
        // own copy.
        let (socket, peer) = match listener.accept().await {
            Ok(pair) => pair,
            Err(e) => {
                log.fatal("system call: accept", os_code(&e)).await;
                return Err(e).context("accepting connection");
            }
        };
        hit += 1;
        info!(hit, "Accepted connection from {}", peer);

        let conn = Connection::new(socket, peer, cfg.root.clone(), log.clone());
        tokio::spawn(async move {
            if let Err(rejection) = conn.run().await {
                tracing::warn!(hit, "Connection from {} rejected: {}", peer, rejection);
            }
        });
    }
}

fn bind(addr: &str) -> io::Result<TcpListener> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let socket = if addr.is_ipv6() {
        TcpSocket::new_v6()?
    } else {
        TcpSocket::new_v4()?
    };
    socket.bind(addr)?;
    socket.listen(BACKLOG)
}

fn os_code(e: &io::Error) -> i32 {
    e.raw_os_error().unwrap_or(-1)
}
