//! Interleaved 3-channel 8-bit images: a borrowed input view and an owned
//! buffer for the annotated diagnostic frame.

/// Borrowed view over an interleaved RGB frame.
///
/// `stride` is measured in pixels; the byte offset of row `y` is
/// `y * stride * 3`.
#[derive(Clone, Debug)]
pub struct FrameView<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [u8],
}

impl<'a> FrameView<'a> {
    #[inline]
    /// The three channel values at (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.stride + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    /// Borrow row `y` as an interleaved slice of `w * 3` bytes.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride * 3;
        &self.data[start..start + self.w * 3]
    }
}

/// Owned interleaved RGB buffer with tightly packed rows.
#[derive(Clone, Debug)]
pub struct RgbU8 {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: Vec<u8>,
}

impl RgbU8 {
    /// Construct a zero-initialized (black) buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0u8; w * h * 3],
        }
    }

    /// Take ownership of raw interleaved bytes of length `w * h * 3`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), w * h * 3);
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Copy a borrowed frame into a packed owned buffer.
    pub fn from_frame(frame: &FrameView<'_>) -> Self {
        let mut out = Self::new(frame.w, frame.h);
        for y in 0..frame.h {
            out.row_mut(y).copy_from_slice(frame.row(y));
        }
        out
    }

    #[inline]
    /// The three channel values at (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.stride + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    /// Overwrite the pixel at (x, y).
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = (y * self.stride + x) * 3;
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    #[inline]
    /// Borrow row `y` mutably as an interleaved slice of `w * 3` bytes.
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride * 3;
        let end = start + self.w * 3;
        &mut self.data[start..end]
    }

    /// Borrow as a read-only `FrameView`.
    pub fn as_view(&self) -> FrameView<'_> {
        FrameView {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: &self.data,
        }
    }
}
