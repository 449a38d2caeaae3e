use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::derive::PalettePolicy;

/// Derive a triadic page palette with readable text colors from a single color.
#[derive(Parser, Debug)]
#[command(name = "hueshift", version, about)]
pub struct Args {
    /// Color name, hex value, or rgb()/hsl() expression (interactive mode if omitted)
    pub color: Option<String>,

    /// Which slot carries the input color unchanged
    #[arg(short, long, value_enum, env = "HUESHIFT_POLICY", default_value_t = PalettePolicy::HueAnchored)]
    pub policy: PalettePolicy,

    /// Write CSS to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Selector the custom properties are declared on
    #[arg(long, default_value = ":root")]
    pub selector: String,

    /// Only emit the custom properties, without the element rules
    #[arg(long)]
    pub no_element_rules: bool,

    /// Print a colored terminal preview of the palette to stderr
    #[arg(long)]
    pub preview: bool,

    /// Launch interactive TUI mode
    #[arg(long, conflicts_with = "color")]
    pub tui: bool,
}
