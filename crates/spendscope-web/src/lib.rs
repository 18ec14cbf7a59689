//! spendscope-web — Web front end for the vendor analytics dashboard.
//! Serves one page assembled from pre-generated artefacts on disk:
//!   - interactive chart fragments embedded verbatim
//!   - static analysis images served from `/static`

pub mod assets;
pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;
