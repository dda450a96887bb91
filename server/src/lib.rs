//! HTTP API over a read-only Pokedex dataset.
//!
//! The dataset is loaded once and shared with every handler through
//! [`AppState`]. Handlers are thin wrappers around `pokedex-query`; response
//! shaping and error mapping live in [`state`] and [`error`].
//!
//! # Example Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use pokedex_data::Dataset;
//! use pokedex_server::{build_router, AppState};
//!
//! let dataset = Dataset::load("data.json")?;
//! let app = build_router(AppState::new(Arc::new(dataset), true));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
