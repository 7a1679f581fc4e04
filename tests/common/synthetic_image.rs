/// Generates a light floor frame with a dark vertical line.
///
/// The line spans the full height, centered at `line_x` with the given
/// width (odd widths center exactly).
pub fn vertical_line_rgb(
    width: usize,
    height: usize,
    line_x: usize,
    line_width: usize,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(line_x < width, "line must lie inside the frame");
    assert!(line_width > 0, "line width must be positive");

    let mut img = vec![235u8; width * height * 3];
    let half = line_width / 2;
    let x0 = line_x.saturating_sub(half);
    let x1 = (line_x + half).min(width - 1);
    for y in 0..height {
        for x in x0..=x1 {
            let idx = (y * width + x) * 3;
            img[idx] = 20;
            img[idx + 1] = 20;
            img[idx + 2] = 20;
        }
    }
    img
}

/// Uniform frame of a single color.
pub fn uniform_rgb(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
    let mut img = Vec::with_capacity(width * height * 3);
    for _ in 0..width * height {
        img.extend_from_slice(&rgb);
    }
    img
}
