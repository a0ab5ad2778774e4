//! HTTP/1.1 request engine.
//!
//! Each accepted client is driven by a [`connection::Connection`] that answers
//! one request at a time over a persistent connection.
//!
//! - **`connection`**: Per-client state machine and idle timeout
//! - **`handler`**: Turns a decoded message into a response
//! - **`parser`**: Request line grammar and header lines
//! - **`request`**: Parsed request representation
//! - **`cookie`**: Visit counter carried in the `cookie_counter` cookie
//! - **`mime`**: Fixed extension to content type table
//! - **`response`**: Status codes and response builder
//! - **`writer`**: Serializes and writes responses to the client
//! - **`error`**: Per-request error taxonomy
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐  idle timeout / peer close / undecodable
//!        │   Waiting   │ ─────────────────────────────────────────┐
//!        └──────┬──────┘                                          │
//!               │ bytes received                                  │
//!               ▼                                                 │
//!        ┌─────────────┐                                          │
//!        │   Reading   │ ← parse, check, resolve                  │
//!        └──────┬──────┘                                          │
//!               │ response ready (200 or error page)              │
//!               ▼                                                 │
//!        ┌─────────────┐  send failure                            ▼
//!        │ Responding  │ ──────────────────────────────────► ┌─────────┐
//!        └──────┬──────┘                                     │ Closed  │
//!               │ response sent                              └─────────┘
//!               └─► Waiting (idle timer restarts)
//! ```

pub mod connection;
pub mod cookie;
pub mod error;
pub mod handler;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
