//! CI/CD pipeline PoC mock service.
//!
//! Serves liveness, build info, time and a fixed set of error responses under
//! `/api` and `/status`. Every response is assembled from the clock and
//! static configuration; nothing is persisted.
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
