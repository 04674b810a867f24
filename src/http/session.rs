use std::net::{IpAddr, SocketAddr};

use tokio::net::TcpStream;

use crate::http::parser::ParsedRequest;

/// Everything needed to log and respond to one request.
///
/// A session owns its socket exclusively; it is created right after
/// accept, filled incrementally by the parser, consumed by the logger,
/// and dropped when the worker terminates.
pub struct Session {
    pub socket: TcpStream,
    /// Requested resource line, raw at first, truncated by the gates.
    pub resource: Option<String>,
    pub host: Option<String>,
    pub agent: Option<String>,
    pub remote_addr: IpAddr,
    pub remote_port: u16,
}

impl Session {
    /// The peer address is copied out of `peer` here, before the accept
    /// loop can move on.
    pub fn new(socket: TcpStream, peer: SocketAddr) -> Self {
        Self {
            socket,
            resource: None,
            host: None,
            agent: None,
            remote_addr: peer.ip(),
            remote_port: peer.port(),
        }
    }

    /// Merge parsed request fields into the session.
    pub fn absorb(&mut self, parsed: ParsedRequest) {
        if parsed.resource.is_some() {
            self.resource = parsed.resource;
        }
        if parsed.host.is_some() {
            self.host = parsed.host;
        }
        if parsed.agent.is_some() {
            self.agent = parsed.agent;
        }
    }

    /// Resource as logged; `-` when the parser never filled it.
    pub fn resource(&self) -> &str {
        self.resource.as_deref().unwrap_or("-")
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or("-")
    }
}
