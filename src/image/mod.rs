pub mod gray;
pub mod io;
pub mod rgb;

pub use self::gray::GrayU8;
pub use self::rgb::{FrameView, RgbU8};
