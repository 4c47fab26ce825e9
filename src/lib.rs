//! # Trivia API
//!
//! A JSON backend for a trivia game. It stores questions (with answer,
//! category and difficulty) and categories in SQLite and serves endpoints to
//! list, paginate, search, create and delete them, and to draw random quiz
//! questions the player has not seen yet.
//!
//! ## Architecture
//!
//! - **Axum**: HTTP server and routing
//! - **SQLx**: asynchronous SQLite access
//! - **Tokio**: async runtime
//! - **Serde**: JSON request and response bodies
//!
//! ## Core Components
//!
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`db`]: schema setup and query functions
//! - [`deserializers`]: lenient number/id parsing for request bodies
//! - [`error`]: the error type and its JSON envelope
//! - [`extract`]: extractors that reject with that envelope
//! - [`pagination`]: page-window arithmetic
//! - [`quiz`]: unseen-question filtering and random selection
//! - [`routes`]: HTTP handlers and the router
//! - [`state`]: shared application state
//! - [`types`]: records and request/response bodies

pub mod config;
pub mod db;
pub mod deserializers;
pub mod error;
pub mod extract;
pub mod pagination;
pub mod quiz;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
