// Public fallible APIs in this crate share one concrete error contract (`TeikningarError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod store;
pub mod text;
pub mod viewport;
pub mod zoom;

pub use config::AppConfig;
pub use error::{Result, TeikningarError};
pub use search::{SearchIndex, search};
pub use store::{MemoryBackend, PersistenceBackend, PreferenceStore};
pub use text::normalize;
pub use viewport::{GeoBounds, visible_addresses};
pub use zoom::{ImageViewer, ZoomState};
