pub mod css;

use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::derive::Palette;

/// A presentation format a derived palette can be written in.
pub trait StyleBackend {
    /// Human-readable name of the format.
    fn name(&self) -> &str;

    /// Render the palette in this format.
    fn serialize(&self, palette: &Palette) -> String;

    /// Write the rendered palette to `path`.
    fn write_to(&self, palette: &Palette, path: &Path) -> Result<()> {
        let content = self.serialize(palette);
        std::fs::write(path, content).with_context(|| {
            format!("failed to write {} output to {}", self.name(), path.display())
        })?;
        Ok(())
    }
}
