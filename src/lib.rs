//! sstt - static file HTTP/1.1 server
//!
//! Serves files from a webroot over persistent connections, throttling
//! clients through a cookie-carried visit counter.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
