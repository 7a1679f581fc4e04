use line_follower::config::demo;
use line_follower::image::io::{
    load_color_image, load_color_image_resized, save_gray_u8, save_rgb_u8, write_json_file,
};
use line_follower::LineFollower;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = demo::load_config(Path::new(&config_path))?;

    let frame = match config.resize {
        Some((w, h)) => load_color_image_resized(&config.input, w, h)?,
        None => load_color_image(&config.input)?,
    };

    let mut follower = LineFollower::new(config.params.clone());
    let report = follower.process_with_report(&frame.as_view())?;

    println!(
        "{}: error={:+.2}px segments={} lines={} ({:.2} ms)",
        config.input.display(),
        report.result.error,
        report.result.valid_segments,
        report.result.lines_detected,
        report.timing.total_ms
    );

    let artifacts = follower
        .artifacts()
        .ok_or("No artifacts after processing")?;
    if let Some(path) = &config.output.mask {
        save_gray_u8(&artifacts.filtered, path)?;
        println!("Saved mask to {}", path.display());
    }
    if let Some(path) = &config.output.edges {
        save_gray_u8(&artifacts.edges, path)?;
        println!("Saved edge map to {}", path.display());
    }
    if let Some(path) = &config.output.annotated {
        save_rgb_u8(&artifacts.annotated, path)?;
        println!("Saved annotated frame to {}", path.display());
    }
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: follow_demo <config.json>".to_string()
}
