use crate::detector::FollowerParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional artifact destinations; unset entries are skipped.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub annotated: Option<PathBuf>,
    pub mask: Option<PathBuf>,
    pub edges: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    pub input: PathBuf,
    /// Optional `[width, height]` the frame is resized to before
    /// processing.
    #[serde(default)]
    pub resize: Option<(usize, usize)>,
    #[serde(default)]
    pub params: FollowerParams,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
