//! cloth - a miniscule HTTP/1.0 static-file server.
//!
//! Core library: configuration, the request pipeline, and the session log.

pub mod config;
pub mod http;
pub mod log;
pub mod server;
