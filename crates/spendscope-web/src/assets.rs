//! Asset discovery: startup verification, chart loading and image indexing.
//!
//! All three walk the configured allow-lists in order. Only allow-listed
//! names are ever looked up; nothing else in the directories is read.

use std::path::Path;

use spendscope_common::{DashboardError, GraphEntry, ImageEntry, Result};
use spendscope_config::AssetLayout;
use tracing::{debug, error, info, warn};

/// Allow-listed files that were not found on disk, per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub missing_graphs: Vec<String>,
    pub missing_images: Vec<String>,
}

impl VerifyReport {
    pub fn is_complete(&self) -> bool {
        self.missing_graphs.is_empty() && self.missing_images.is_empty()
    }
}

/// Ensure both asset directories exist, then list what the allow-lists are missing.
///
/// May create empty directories as a side effect.
pub fn verify_assets(layout: &AssetLayout) -> Result<VerifyReport> {
    let graphs_dir = layout.graphs_path();
    let images_dir = layout.images_path();

    for dir in [&graphs_dir, &images_dir] {
        std::fs::create_dir_all(dir).map_err(|e| DashboardError::io(dir, e))?;
    }

    Ok(VerifyReport {
        missing_graphs: missing_in(&graphs_dir, &layout.graphs)?,
        missing_images: missing_in(&images_dir, &layout.images)?,
    })
}

fn missing_in(dir: &Path, allow_list: &[String]) -> Result<Vec<String>> {
    let mut missing = Vec::new();
    for file in allow_list {
        let path = dir.join(file);
        if !path.try_exists().map_err(|e| DashboardError::io(&path, e))? {
            missing.push(file.clone());
        }
    }
    Ok(missing)
}

/// Startup gate: `true` only when every allow-listed file is present.
/// Never fails; filesystem errors are logged and count as a failed check.
pub fn verify_startup(layout: &AssetLayout) -> bool {
    match verify_assets(layout) {
        Ok(report) if report.is_complete() => {
            info!("All files verified successfully!");
            true
        }
        Ok(report) => {
            warn!("Missing files:");
            if !report.missing_graphs.is_empty() {
                warn!("Graphs: {:?}", report.missing_graphs);
            }
            if !report.missing_images.is_empty() {
                warn!("Images: {:?}", report.missing_images);
            }
            false
        }
        Err(e) => {
            error!("Error verifying files: {e}");
            false
        }
    }
}

/// Load every present chart fragment in allow-list order.
///
/// Absent files are skipped. Any other I/O failure discards the whole
/// result and yields an empty list.
pub async fn load_graphs(layout: &AssetLayout) -> Vec<GraphEntry> {
    match try_load_graphs(layout).await {
        Ok(graphs) => graphs,
        Err(e) => {
            warn!("Error loading graphs: {e}");
            Vec::new()
        }
    }
}

async fn try_load_graphs(layout: &AssetLayout) -> Result<Vec<GraphEntry>> {
    let dir = layout.graphs_path();
    let mut graphs = Vec::with_capacity(layout.graphs.len());

    for file in &layout.graphs {
        let path = dir.join(file);
        if !exists(&path).await? {
            debug!("Skipping absent graph {}", path.display());
            continue;
        }
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| DashboardError::io(&path, e))?;
        graphs.push(GraphEntry::new(file, content));
    }
    Ok(graphs)
}

/// Index every present image in allow-list order without reading its bytes.
/// Fails soft to an empty list, like [`load_graphs`].
pub async fn index_images(layout: &AssetLayout) -> Vec<ImageEntry> {
    match try_index_images(layout).await {
        Ok(images) => images,
        Err(e) => {
            warn!("Error loading images: {e}");
            Vec::new()
        }
    }
}

async fn try_index_images(layout: &AssetLayout) -> Result<Vec<ImageEntry>> {
    let dir = layout.images_path();
    let mut images = Vec::with_capacity(layout.images.len());

    for file in &layout.images {
        if exists(&dir.join(file)).await? {
            images.push(ImageEntry::new(file));
        }
    }
    Ok(images)
}

async fn exists(path: &Path) -> Result<bool> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|e| DashboardError::io(path, e))
}
