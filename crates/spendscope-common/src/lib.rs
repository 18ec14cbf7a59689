//! spendscope-common — Shared types and errors used across all Spendscope crates.

pub mod error;
pub mod entries;

// Re-export commonly used types
pub use entries::{display_title, GraphEntry, ImageEntry};
pub use error::{DashboardError, Result};
