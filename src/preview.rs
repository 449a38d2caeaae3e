use crossterm::style::{Color, Stylize};

use crate::color::Rgb;
use crate::pipeline::derive::Palette;

const SWATCH_WIDTH: usize = 12;

fn to_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Render a colored terminal preview: one swatch per slot, labelled in its text
/// contrast color, followed by the HSL value and hex codes.
pub fn render(palette: &Palette) -> String {
    let mut out = format!("  base {}  policy {}\n", palette.base, palette.policy);
    for entry in palette.iter() {
        let bg = entry.hsl.to_rgb();
        let label = format!("{:^width$}", entry.slot.name(), width = SWATCH_WIDTH)
            .with(to_color(entry.text.rgb()))
            .on(to_color(bg))
            .bold();
        out.push_str(&format!("  {label}  {}  {}  text {}\n", entry.hsl, bg, entry.text));
    }
    out
}
