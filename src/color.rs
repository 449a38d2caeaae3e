use std::fmt;

/// An sRGB color with 8-bit channels.
///
/// This is the form every resolved input takes before it enters the color algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color like `#ff8800`, `ff8800`, `#f80`, or the alpha forms
    /// `#f80c` / `#ff8800cc`. Alpha is accepted and dropped.
    ///
    /// Returns `None` for any other length or for non-hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let short = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 | 4 => {
                if hex.len() == 4 {
                    short(3)?;
                }
                Some(Self::new(short(0)?, short(1)?, short(2)?))
            }
            6 | 8 => {
                if hex.len() == 8 {
                    long(6)?;
                }
                Some(Self::new(long(0)?, long(2)?, long(4)?))
            }
            _ => None,
        }
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness `0.299r + 0.587g + 0.114b`, in thousandths.
    ///
    /// Integer so that threshold comparisons are exact.
    pub fn brightness_millis(self) -> u32 {
        299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)
    }

    /// Perceived brightness on the 0-255 scale.
    pub fn brightness(self) -> f64 {
        f64::from(self.brightness_millis()) / 1000.0
    }

    /// Convert to HSL.
    ///
    /// Hue is rounded to a whole degree, saturation and lightness to one decimal
    /// place. Achromatic colors get hue 0 and saturation 0.
    ///
    /// All arithmetic is `f64` in a fixed operation order, so ties such as
    /// `rgb(0, 17, 24)` (hue exactly 197.5 on paper) land on the same side as a
    /// browser's `Math.round` / `toFixed(1)` on the same input.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let cmax = r.max(g).max(b);
        let cmin = r.min(g).min(b);
        let delta = cmax - cmin;

        // Branch on the integer channels; float equality on cmax is not needed.
        let sector = if delta == 0.0 {
            0.0
        } else if self.r >= self.g && self.r >= self.b {
            // Truncated remainder keeps this in [-1, 1].
            ((g - b) / delta) % 6.0
        } else if self.g >= self.b {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let mut h = round_half_up(sector * 60.0) as i32;
        if h < 0 {
            h += 360;
        }

        let l = (cmax + cmin) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        Hsl::new(h, round_tenth(s * 100.0), round_tenth(l * 100.0))
    }

    /// Convert HSL components to RGB without first rounding the hue.
    ///
    /// `h` is in degrees and wrapped into `[0, 360)`; `s` and `l` are
    /// percentages clamped to `[0, 100]`. Channels are rounded half up and
    /// clamped to `[0, 255]`.
    pub fn from_hsl_degrees(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0);
        let s = clamp_percent(s) / 100.0;
        let l = clamp_percent(l) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f64| round_half_up((v + m) * 255.0).clamp(0.0, 255.0) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color in the HSL model.
///
/// Hue is a whole degree in `[0, 360)`; saturation and lightness are percentages
/// in `[0, 100]`. Construction wraps the hue and clamps the percentages, so every
/// value of this type satisfies those ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    h: u16,
    s: f64,
    l: f64,
}

impl Hsl {
    pub fn new(h: i32, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360) as u16,
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    pub fn h(&self) -> u16 {
        self.h
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    pub fn l(&self) -> f64 {
        self.l
    }

    /// Shift the hue by `degrees`, wrapping modulo 360.
    pub fn rotate(self, degrees: i32) -> Self {
        Self::new(i32::from(self.h) + degrees, self.s, self.l)
    }

    pub fn with_saturation(self, s: f64) -> Self {
        Self::new(i32::from(self.h), s, self.l)
    }

    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(i32::from(self.h), self.s, l)
    }

    /// Convert to 8-bit RGB using the chroma / second component / match
    /// construction.
    pub fn to_rgb(self) -> Rgb {
        Rgb::from_hsl_degrees(f64::from(self.h), self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 100.0)
    }
}

/// Round to the nearest integer, ties toward positive infinity.
fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to one decimal place by the exact binary value of `v`, ties toward
/// positive infinity.
///
/// `81.25` is a true tie and rounds up, while `s * 100.0` for `rgb(3, 7, 93)`
/// lands just below 93.75 and rounds down.
fn round_tenth(v: f64) -> f64 {
    // Only multiples of 0.25 can sit exactly halfway between two tenths.
    if (v * 4.0).fract() == 0.0 && (v * 10.0).fract() != 0.0 {
        return round_half_up(v * 10.0) / 10.0;
    }
    // Fixed-precision formatting rounds the exact value correctly.
    format!("{v:.1}").parse().unwrap_or(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hsl(hsl: Hsl, h: u16, s: f64, l: f64) {
        assert_eq!(hsl.h(), h, "hue mismatch for {hsl}");
        assert!((hsl.s() - s).abs() < 0.01, "saturation mismatch for {hsl}");
        assert!((hsl.l() - l).abs() < 0.01, "lightness mismatch for {hsl}");
    }

    #[test]
    fn hex_round_trip() {
        let original = Rgb::from_hex("#ff8800").unwrap();
        assert_eq!(original, Rgb::new(255, 136, 0));
        assert_eq!(original.to_hex(), "#ff8800");
    }

    #[test]
    fn hex_uppercase_input() {
        let color = Rgb::from_hex("#FF8800").unwrap();
        assert_eq!(color.to_hex(), "#ff8800");
    }

    #[test]
    fn hex_without_hash() {
        let color = Rgb::from_hex("aabbcc").unwrap();
        assert_eq!(color.to_hex(), "#aabbcc");
    }

    #[test]
    fn hex_short_form_expands() {
        assert_eq!(Rgb::from_hex("#f80"), Some(Rgb::new(255, 136, 0)));
    }

    #[test]
    fn hex_alpha_is_dropped() {
        assert_eq!(Rgb::from_hex("#ff880080"), Some(Rgb::new(255, 136, 0)));
        assert_eq!(Rgb::from_hex("#f808"), Some(Rgb::new(255, 136, 0)));
    }

    #[test]
    fn hex_invalid_length() {
        assert!(Rgb::from_hex("#ff").is_none());
        assert!(Rgb::from_hex("#ff880").is_none());
        assert!(Rgb::from_hex("#ff88001").is_none());
    }

    #[test]
    fn hex_invalid_chars() {
        assert!(Rgb::from_hex("#gggggg").is_none());
        assert!(Rgb::from_hex("#ff880g").is_none());
        assert!(Rgb::from_hex("#é00").is_none());
        assert!(Rgb::from_hex("#+f0000").is_none());
    }

    #[test]
    fn primaries_to_hsl() {
        assert_hsl(Rgb::new(255, 0, 0).to_hsl(), 0, 100.0, 50.0);
        assert_hsl(Rgb::new(0, 255, 0).to_hsl(), 120, 100.0, 50.0);
        assert_hsl(Rgb::new(0, 0, 255).to_hsl(), 240, 100.0, 50.0);
    }

    #[test]
    fn named_colors_to_hsl() {
        // tomato
        assert_hsl(Rgb::new(255, 99, 71).to_hsl(), 9, 100.0, 63.9);
        // navy
        assert_hsl(Rgb::new(0, 0, 128).to_hsl(), 240, 100.0, 25.1);
        // hotpink: negative raw hue wraps to 330
        assert_hsl(Rgb::new(255, 105, 180).to_hsl(), 330, 100.0, 70.6);
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        for v in [0u8, 1, 128, 254, 255] {
            let hsl = Rgb::new(v, v, v).to_hsl();
            assert_eq!(hsl.h(), 0);
            assert_eq!(hsl.s(), 0.0);
        }
        assert_hsl(Rgb::new(128, 128, 128).to_hsl(), 0, 0.0, 50.2);
    }

    #[test]
    fn hsl_to_rgb_sectors() {
        assert_eq!(Hsl::new(0, 100.0, 50.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsl::new(60, 100.0, 50.0).to_rgb(), Rgb::new(255, 255, 0));
        assert_eq!(Hsl::new(120, 100.0, 50.0).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsl::new(180, 100.0, 50.0).to_rgb(), Rgb::new(0, 255, 255));
        assert_eq!(Hsl::new(240, 100.0, 50.0).to_rgb(), Rgb::new(0, 0, 255));
        assert_eq!(Hsl::new(300, 100.0, 50.0).to_rgb(), Rgb::new(255, 0, 255));
    }

    #[test]
    fn hsl_to_rgb_dark_desaturated() {
        assert_eq!(Hsl::new(0, 60.0, 15.0).to_rgb(), Rgb::new(61, 15, 15));
        assert_eq!(Hsl::new(0, 0.0, 15.0).to_rgb(), Rgb::new(38, 38, 38));
    }

    #[test]
    fn rgb_to_hsl_round_trip() {
        let colors = [
            Rgb::new(200, 100, 50),
            Rgb::new(0, 255, 0),
            Rgb::new(128, 128, 128),
            Rgb::new(255, 99, 71),
            Rgb::BLACK,
            Rgb::WHITE,
        ];
        for original in colors {
            let recovered = original.to_hsl().to_rgb();
            for (a, b) in [
                (original.r, recovered.r),
                (original.g, recovered.g),
                (original.b, recovered.b),
            ] {
                assert!(
                    (a as i16 - b as i16).unsigned_abs() <= 1,
                    "channel mismatch for {original}: got {recovered}"
                );
            }
        }
    }

    #[test]
    fn hue_rounding_shifts_middle_channel() {
        // 0.47 degrees rounds to 0, so the green channel is lost.
        let hsl = Rgb::new(255, 2, 0).to_hsl();
        assert_eq!(hsl.h(), 0);
        assert_eq!(hsl.to_rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn hue_rounds_computed_double() {
        // 197.5 exactly rounds up; 122.49999999999999 rounds down.
        assert_eq!(Rgb::new(0, 17, 24).to_hsl().h(), 198);
        assert_eq!(Rgb::new(0, 24, 1).to_hsl().h(), 122);
        assert_eq!(Rgb::new(0, 170, 240).to_hsl().h(), 198);
    }

    #[test]
    fn saturation_rounds_binary_value() {
        // 93.75 on paper, 93.74999999999999 in f64.
        assert_eq!(Rgb::new(3, 7, 93).to_hsl().s(), 93.7);
        // Exactly 81.25 in f64, a true tie.
        assert_eq!(Rgb::new(3, 3, 29).to_hsl().s(), 81.3);
        assert_eq!(round_tenth(81.25), 81.3);
        assert_eq!(round_tenth(63.94), 63.9);
        assert_eq!(round_tenth(4.75), 4.8);
    }

    #[test]
    fn fractional_hue_to_rgb() {
        assert_eq!(Rgb::from_hsl_degrees(30.4, 100.0, 50.0), Rgb::new(255, 129, 0));
        assert_eq!(Rgb::from_hsl_degrees(30.0, 100.0, 50.0), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hsl_degrees(-120.0, 100.0, 50.0), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from_hsl_degrees(359.9, 100.0, 50.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn agrees_with_palette_crate() {
        use palette::{FromColor, Hsl as RefHsl, Srgb};

        let colors = [
            Rgb::new(200, 100, 50),
            Rgb::new(12, 200, 180),
            Rgb::new(90, 30, 220),
            Rgb::new(255, 105, 180),
        ];
        for color in colors {
            let ours = color.to_hsl();
            let srgb: Srgb<f64> = Srgb::new(color.r, color.g, color.b).into_format();
            let reference: RefHsl<palette::encoding::Srgb, f64> = RefHsl::from_color(srgb);

            // Tolerance covers our rounding only; exact tie cases are pinned in
            // `hue_rounds_computed_double` and `saturation_rounds_binary_value`.
            let ref_hue = reference.hue.into_positive_degrees();
            let hue_diff = (f64::from(ours.h()) - ref_hue).abs();
            assert!(
                hue_diff <= 0.5 || hue_diff >= 359.5,
                "hue for {color}: {} vs {ref_hue}",
                ours.h()
            );
            assert!((ours.s() - reference.saturation * 100.0).abs() <= 0.1);
            assert!((ours.l() - reference.lightness * 100.0).abs() <= 0.1);
        }
    }

    #[test]
    fn rotation_wraps() {
        let hsl = Hsl::new(350, 50.0, 50.0);
        assert_eq!(hsl.rotate(120).h(), 110);
        assert_eq!(hsl.rotate(-360).h(), 350);
        assert_eq!(Hsl::new(720, 0.0, 0.0).h(), 0);
    }

    #[test]
    fn percentages_are_clamped() {
        let hsl = Hsl::new(0, 140.0, -3.0);
        assert_eq!(hsl.s(), 100.0);
        assert_eq!(hsl.l(), 0.0);
        assert_eq!(Hsl::new(0, f64::NAN, 50.0).s(), 0.0);
    }

    #[test]
    fn brightness_weights() {
        assert_eq!(Rgb::new(0, 255, 0).brightness_millis(), 149_685);
        assert!((Rgb::new(0, 255, 0).brightness() - 149.685).abs() < 0.001);
        assert_eq!(Rgb::WHITE.brightness_millis(), 255_000);
        assert_eq!(Rgb::BLACK.brightness_millis(), 0);
    }

    #[test]
    fn hsl_display_is_css() {
        assert_eq!(Hsl::new(120, 100.0, 50.0).to_string(), "hsl(120, 100%, 50%)");
        assert_eq!(Rgb::new(255, 99, 71).to_hsl().to_string(), "hsl(9, 100%, 63.9%)");
    }

    #[test]
    fn display_matches_to_hex() {
        let color = Rgb::new(171, 205, 239);
        assert_eq!(format!("{color}"), color.to_hex());
    }
}
