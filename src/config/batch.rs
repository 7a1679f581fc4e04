use crate::detector::FollowerParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BatchConfig {
    /// Directory scanned (non-recursively) for image files.
    pub input_dir: PathBuf,
    /// Optional `[width, height]` every frame is resized to.
    #[serde(default)]
    pub resize: Option<(usize, usize)>,
    #[serde(default)]
    pub params: FollowerParams,
    /// Where to write the per-frame JSON summaries, if anywhere.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<BatchConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
