//! IRR REST API Server.
//!
//! Thin HTTP shell over `irr-analytics`.
//!
//! ## Endpoints
//!
//! - `GET /` - readiness message
//! - `GET /health` - status and version
//! - `POST /solve` - IRR of `{spending, income, code}`; `code` must be `"resolve"`
//!
//! ## Usage
//!
//! ```bash
//! # Start server on default port
//! irr-api-server
//!
//! # Custom host and port
//! irr-api-server --host 0.0.0.0 --port 3000
//!
//! # Load settings from a TOML file
//! irr-api-server --config config/irr.toml
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::{create_router, run_server};
pub use state::AppState;
