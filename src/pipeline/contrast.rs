use std::fmt;

use crate::color::{Hsl, Rgb};

/// Brightness above which black text is chosen, on the 0-255 scale.
pub const BRIGHTNESS_THRESHOLD: u32 = 128;

/// Text color to draw on top of a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextContrast {
    Black,
    White,
}

impl TextContrast {
    pub fn rgb(self) -> Rgb {
        match self {
            TextContrast::Black => Rgb::BLACK,
            TextContrast::White => Rgb::WHITE,
        }
    }
}

impl fmt::Display for TextContrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rgb())
    }
}

/// Pick black or white text for a background color.
///
/// Uses perceived brightness `0.299r + 0.587g + 0.114b` with a fixed threshold of
/// 128. This is a cheap legibility heuristic, not a WCAG contrast-ratio check: it
/// does not guarantee AA or AAA compliance.
pub fn select_text_contrast(background: Hsl) -> TextContrast {
    if background.to_rgb().brightness_millis() > BRIGHTNESS_THRESHOLD * 1000 {
        TextContrast::Black
    } else {
        TextContrast::White
    }
}
