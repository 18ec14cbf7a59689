//! Shared application state for the web server.

use std::sync::Arc;

use minijinja::Environment;
use spendscope_common::Result;
use spendscope_config::AssetLayout;

use crate::templates;

/// Shared state injected into every Axum handler. Immutable after startup.
pub struct AppState {
    pub layout: AssetLayout,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(layout: AssetLayout) -> Result<Self> {
        Ok(Self { layout, templates: templates::environment()? })
    }
}

pub type SharedState = Arc<AppState>;
