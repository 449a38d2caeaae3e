use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Rgb;
use crate::pipeline::contrast::TextContrast;
use crate::pipeline::derive::{Palette, PaletteEntry};

const SWATCH_WIDTH: usize = 12;

/// Renders the derived palette as one swatch row per slot, each labelled in its
/// text contrast color, with the HSL and hex values beside it.
pub struct PaletteWidget<'a> {
    palette: Option<&'a Palette>,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(palette: Option<&'a Palette>) -> Self {
        Self { palette }
    }
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

fn contrast_fg(text: TextContrast) -> Color {
    match text {
        TextContrast::Black => Color::Black,
        TextContrast::White => Color::White,
    }
}

fn build_swatch_row(entry: &PaletteEntry) -> Line<'static> {
    let bg = entry.hsl.to_rgb();
    let label = format!("{:^width$}", entry.slot.name(), width = SWATCH_WIDTH);
    let style = Style::default()
        .bg(to_color(bg))
        .fg(contrast_fg(entry.text))
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw("  "),
        Span::styled(label, style),
        Span::raw(format!("  {}  {}", entry.hsl, bg)),
        Span::styled(
            format!("  text {}", entry.text),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Palette");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.palette {
            None => vec![Line::from(Span::styled(
                "  Type a color and press Enter",
                Style::default().fg(Color::DarkGray),
            ))],
            Some(palette) => {
                let mut lines: Vec<Line> = palette.iter().map(build_swatch_row).collect();
                lines.push(Line::from(""));
                lines.push(Line::from(format!(
                    "  base {}  policy {}",
                    palette.base, palette.policy
                )));
                lines
            }
        };

        Paragraph::new(lines).render(inner, buf);
    }
}
