//! Shared types for the AssetVerse backend
//!
//! Domain models, the unified error system, and small utilities used by
//! the asset-cloud service.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};
