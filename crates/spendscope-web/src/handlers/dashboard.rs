//! Dashboard handler — the single page listing every available chart and image.

use axum::{extract::State, response::Html};
use spendscope_common::Result;
use tracing::debug;

use crate::assets::{index_images, load_graphs};
use crate::state::SharedState;
use crate::templates::render_dashboard;

/// `GET /`. Always renders; sections are empty when nothing could be loaded.
pub async fn dashboard(State(state): State<SharedState>) -> Result<Html<String>> {
    let graphs = load_graphs(&state.layout).await;
    let images = index_images(&state.layout).await;
    debug!(graphs = graphs.len(), images = images.len(), "Rendering dashboard");

    let page = render_dashboard(
        &state.templates,
        &graphs,
        &images,
        &state.layout.images_url_prefix(),
    )?;
    Ok(Html(page))
}
