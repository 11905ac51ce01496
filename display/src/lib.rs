pub use display::{Display, DisplayError};
pub use palette::{parse_rgb, HexColor, Palette, Rgb};

mod display;
mod palette;
