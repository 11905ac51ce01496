use std::str::FromStr;

/// A 24-bit colour as red, green, blue
pub type Rgb = [u8; 3];

/// Colours for lit and unlit cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgb,
    pub background: Rgb,
}

impl Palette {
    /// The colour of a single FrameBuffer cell
    pub fn color(&self, cell: u8) -> Rgb {
        if cell == 0 {
            self.background
        } else {
            self.foreground
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            foreground: [0xFF, 0xFF, 0xFF],
            background: [0x00, 0x00, 0x00],
        }
    }
}

/// Parses `RRGGBB`, with or without a leading `#`
pub fn parse_rgb(s: &str) -> Result<Rgb, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("expected a colour like 1A2B3C, got {:?}", s));
    }
    let mut rgb = [0; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|e| format!("invalid colour {:?}: {}", s, e))?;
    }
    Ok(rgb)
}

/// Wrapper so colours can be parsed straight off the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(pub Rgb);

impl FromStr for HexColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rgb(s).map(HexColor)
    }
}
