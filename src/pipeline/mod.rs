pub mod contrast;
pub mod derive;
pub mod resolve;

use tracing::{debug, warn};

use crate::color::Rgb;
use crate::pipeline::derive::{derive_palette, Palette, PalettePolicy};
use crate::pipeline::resolve::{resolve, ResolveError};

/// Convert a resolved color to HSL and derive its palette.
pub fn palette_from_rgb(rgb: Rgb, policy: PalettePolicy) -> Palette {
    let base = rgb.to_hsl();
    debug!(%rgb, %base, %policy, "deriving palette");
    derive_palette(base, policy)
}

/// Resolve free-form input and derive its palette.
///
/// Fails without producing anything if the input is not a recognizable color.
pub fn generate_palette(input: &str, policy: PalettePolicy) -> Result<Palette, ResolveError> {
    let rgb = resolve(input).inspect_err(|err| warn!(input, %err, "rejected color input"))?;
    Ok(palette_from_rgb(rgb, policy))
}
