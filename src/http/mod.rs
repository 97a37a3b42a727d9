//! HTTP listener bootstrap.
//!
//! Binds the listener and runs the axum serve loop. There is no TLS and no
//! graceful shutdown; the process serves until it is killed or the listener
//! fails.

mod server;

pub use server::{bind, serve, start_server};
