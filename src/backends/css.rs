use crate::pipeline::derive::{Palette, Slot};

use super::StyleBackend;

/// Emits the palette as CSS custom properties on a root selector, followed by the
/// element rules that put the about/contact band on the about color.
pub struct CssBackend {
    pub selector: String,
    pub element_rules: bool,
}

impl Default for CssBackend {
    fn default() -> Self {
        Self {
            selector: ":root".to_string(),
            element_rules: true,
        }
    }
}

/// Custom property holding the background color of a slot.
pub fn color_property(slot: Slot) -> &'static str {
    match slot {
        Slot::Main => "--main-color",
        Slot::Welcome => "--welcome-color",
        Slot::About => "--about-contact",
        Slot::Projects => "--projects-dark",
    }
}

/// Custom property holding the text color drawn on a slot.
pub fn text_property(slot: Slot) -> &'static str {
    match slot {
        Slot::Main => "--text-main-contrast",
        Slot::Welcome => "--text-welcome",
        Slot::About => "--text-about",
        Slot::Projects => "--text-projects",
    }
}

impl StyleBackend for CssBackend {
    fn name(&self) -> &str {
        "CSS"
    }

    fn serialize(&self, palette: &Palette) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} {{\n", self.selector));
        for entry in palette.iter() {
            out.push_str(&format!("  {}: {};\n", color_property(entry.slot), entry.hsl));
        }
        for entry in palette.iter() {
            out.push_str(&format!("  {}: {};\n", text_property(entry.slot), entry.text));
        }
        out.push_str("}\n");

        if self.element_rules {
            out.push_str("\n#about-contact-bg {\n");
            out.push_str(&format!(
                "  background-color: var({});\n",
                color_property(Slot::About)
            ));
            out.push_str("}\n");
            out.push_str("\n#about,\n#contact {\n");
            out.push_str("  background-color: transparent;\n");
            out.push_str("}\n");
        }

        out
    }
}
