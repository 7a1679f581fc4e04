use line_follower::config::batch;
use line_follower::image::io::{load_color_image, load_color_image_resized, write_json_file};
use line_follower::types::DetectionResult;
use line_follower::LineFollower;
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = batch::load_config(Path::new(&config_path))?;

    let frames = image_files(&config.input_dir)?;
    if frames.is_empty() {
        return Err(format!(
            "No image files found in {}",
            config.input_dir.display()
        ));
    }

    let mut follower = LineFollower::new(config.params.clone());
    let mut summaries = Vec::with_capacity(frames.len());
    for path in &frames {
        let frame = match config.resize {
            Some((w, h)) => load_color_image_resized(path, w, h),
            None => load_color_image(path),
        };
        let frame = match frame {
            Ok(frame) => frame,
            Err(err) => {
                eprintln!("Skipping {}: {err}", path.display());
                continue;
            }
        };
        let result = follower.process(&frame.as_view())?;
        println!(
            "{}: error={:+.2}px segments={}",
            path.display(),
            result.error,
            result.valid_segments
        );
        summaries.push(FrameSummary {
            file: path.clone(),
            result,
        });
    }

    if let Some(path) = &config.report_json {
        write_json_file(path, &summaries)?;
        println!("Saved {} summaries to {}", summaries.len(), path.display());
    }

    Ok(())
}

fn image_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    IMAGE_EXTENSIONS
                        .iter()
                        .any(|known| ext.eq_ignore_ascii_case(known))
                })
        })
        .collect();
    files.sort();
    Ok(files)
}

fn usage() -> String {
    "Usage: follow_batch <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameSummary {
    file: PathBuf,
    result: DetectionResult,
}
