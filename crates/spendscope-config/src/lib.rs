//! Configuration loading for Spendscope.
//! Reads spendscope.toml from the current directory or path in SPENDSCOPE_CONFIG env var.
//! Every key is optional; an absent file yields the built-in dashboard layout.

use serde::{Deserialize, Serialize};
use spendscope_common::{DashboardError, Result};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "SPENDSCOPE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "spendscope.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assets: AssetLayout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

/// Where the pre-generated dashboard files live and which ones to show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetLayout {
    /// Directory served under `/static`
    #[serde(default = "default_static_root")]
    pub static_root: PathBuf,
    /// Chart fragment subdirectory, relative to `static_root`
    #[serde(default = "default_graphs_dir")]
    pub graphs_dir: String,
    /// Image subdirectory, relative to `static_root`
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
    /// Chart fragment allow-list, in display order
    #[serde(default = "default_graph_files")]
    pub graphs: Vec<String>,
    /// Image allow-list, in display order
    #[serde(default = "default_image_files")]
    pub images: Vec<String>,
}

fn default_static_root() -> PathBuf { PathBuf::from("static") }
fn default_graphs_dir()  -> String  { "graphs".to_string() }
fn default_images_dir()  -> String  { "images".to_string() }

fn default_graph_files() -> Vec<String> {
    [
        "expense_flow_sankey.html",
        "vendor_comparison_chart.html",
        "vendor_repetition_rate_comparison.html",
        "vendor_metrics_dashboard.html",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_image_files() -> Vec<String> {
    [
        "Anomoly_Detection_Heatmap.jpg",
        "Correlation_Matrix.jpg",
        "Payment_Trend.jpg",
        "Top_Vendors_By_anomoly.jpg",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            static_root: default_static_root(),
            graphs_dir:  default_graphs_dir(),
            images_dir:  default_images_dir(),
            graphs:      default_graph_files(),
            images:      default_image_files(),
        }
    }
}

impl AssetLayout {
    /// Layout rooted at `static_root` with the default subdirectories and allow-lists.
    pub fn with_root(static_root: impl Into<PathBuf>) -> Self {
        Self { static_root: static_root.into(), ..Self::default() }
    }

    pub fn graphs_path(&self) -> PathBuf {
        self.static_root.join(&self.graphs_dir)
    }

    pub fn images_path(&self) -> PathBuf {
        self.static_root.join(&self.images_dir)
    }

    /// URL path prefix under which images are served.
    pub fn images_url_prefix(&self) -> String {
        format!("/static/{}", self.images_dir.trim_matches('/'))
    }

    /// Allow-list entries must be bare filenames so lookups stay inside their directory.
    pub fn validate(&self) -> Result<()> {
        for dir in [&self.graphs_dir, &self.images_dir] {
            if dir.is_empty() || dir.split(['/', '\\']).any(|part| part == "..") {
                return Err(DashboardError::Config(format!("invalid asset subdirectory: {dir:?}")));
            }
        }
        for file in self.graphs.iter().chain(&self.images) {
            let bare = Path::new(file).file_name().and_then(|n| n.to_str()) == Some(file.as_str());
            if !bare || file.contains('\\') {
                return Err(DashboardError::Config(format!(
                    "allow-list entry must be a plain filename: {file:?}"
                )));
            }
        }
        // image names and their directory end up verbatim in `src` URLs
        for name in self.images.iter().chain([&self.images_dir]) {
            if let Some(bad) = name.trim_matches('/').chars().find(|c| !is_url_safe(*c)) {
                return Err(DashboardError::Config(format!(
                    "image path {name:?} contains {bad:?}, which is not URL-safe"
                )));
            }
        }
        Ok(())
    }
}

/// RFC 3986 unreserved characters.
fn is_url_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}

impl Config {
    /// Load configuration from spendscope.toml.
    /// Checks SPENDSCOPE_CONFIG env var first, then current directory.
    /// A missing default file falls back to built-in defaults; a missing
    /// file named by the env var is an error.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_path(&path),
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_path(DEFAULT_CONFIG_FILE),
            Err(_) => {
                tracing::info!("No {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DashboardError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.assets.validate()?;
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
