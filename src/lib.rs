//! MuchToDo API health service.
//!
//! Serves a single `/health` endpoint with a fixed JSON payload on
//! `0.0.0.0:8080`.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::ServerError;
pub use routes::create_router;
