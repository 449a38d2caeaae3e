use std::fmt;

use crate::color::Hsl;
use crate::pipeline::contrast::{select_text_contrast, TextContrast};

/// Hue offsets for the two triadic partners of the base color.
const TRIAD_NEAR: i32 = 120;
const TRIAD_FAR: i32 = 240;

const WELCOME_LIGHTNESS: f64 = 50.0;
const ABOUT_LIGHTNESS: f64 = 40.0;
const PROJECTS_SATURATION: f64 = 60.0;
const PROJECTS_LIGHTNESS: f64 = 15.0;

/// Rules deciding which palette slot carries the user's literal color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PalettePolicy {
    /// Main keeps the input color; welcome is rotated 120° at 50% lightness.
    #[default]
    HueAnchored,
    /// Main is rotated 120°; welcome keeps the input color.
    RotatedMain,
}

impl PalettePolicy {
    /// The other policy, for toggling.
    pub fn toggled(self) -> Self {
        match self {
            PalettePolicy::HueAnchored => PalettePolicy::RotatedMain,
            PalettePolicy::RotatedMain => PalettePolicy::HueAnchored,
        }
    }
}

impl fmt::Display for PalettePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PalettePolicy::HueAnchored => "hue-anchored",
            PalettePolicy::RotatedMain => "rotated-main",
        })
    }
}

/// A named theme slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Main,
    Welcome,
    About,
    Projects,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Main, Slot::Welcome, Slot::About, Slot::Projects];

    pub fn name(self) -> &'static str {
        match self {
            Slot::Main => "main",
            Slot::Welcome => "welcome",
            Slot::About => "about",
            Slot::Projects => "projects",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One derived color and the text color that reads on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    pub slot: Slot,
    pub hsl: Hsl,
    pub text: TextContrast,
}

/// The derived palette: one entry per [`Slot`], in [`Slot::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub base: Hsl,
    pub policy: PalettePolicy,
    entries: [PaletteEntry; 4],
}

impl Palette {
    pub fn get(&self, slot: Slot) -> &PaletteEntry {
        // Entries are stored in Slot::ALL order.
        &self.entries[slot as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }
}

/// Derive the four slot colors from `base` under `policy`, each paired with
/// its text contrast.
pub fn derive_palette(base: Hsl, policy: PalettePolicy) -> Palette {
    let near = base.rotate(TRIAD_NEAR);
    let (main, welcome) = match policy {
        PalettePolicy::HueAnchored => (base, near.with_lightness(WELCOME_LIGHTNESS)),
        PalettePolicy::RotatedMain => (near, base),
    };
    let about = base.rotate(TRIAD_FAR).with_lightness(ABOUT_LIGHTNESS);
    let projects = base
        .with_saturation(PROJECTS_SATURATION)
        .with_lightness(PROJECTS_LIGHTNESS);

    let entry = |slot, hsl| PaletteEntry {
        slot,
        hsl,
        text: select_text_contrast(hsl),
    };

    Palette {
        base,
        policy,
        entries: [
            entry(Slot::Main, main),
            entry(Slot::Welcome, welcome),
            entry(Slot::About, about),
            entry(Slot::Projects, projects),
        ],
    }
}
