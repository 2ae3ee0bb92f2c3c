//! RGBA color type, HSL conversion and the fixed rainbow spectrum.

use std::fmt;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use magicanvas::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels (`#RRGGBB` style).
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Converts back to 8-bit channels, rounding to the nearest value.
    pub fn to_rgb8(self) -> [u8; 3] {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }
}

/// A color expressed in CSS HSL terms.
///
/// Hue is in degrees, saturation and lightness are percentages. `Display`
/// produces the compact CSS form, e.g. `hsl(4,100%,50%)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Fully saturated, medium-lightness color used by the cycling brush.
    pub fn vivid(hue: f64) -> Self {
        Self::new(hue, 100.0, 50.0)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        let h = hsl.hue.rem_euclid(360.0);
        let s = (hsl.saturation / 100.0).clamp(0.0, 1.0);
        let l = (hsl.lightness / 100.0).clamp(0.0, 1.0);
        let a = s * l.min(1.0 - l);

        let channel = |n: f64| {
            let k = (n + h / 30.0).rem_euclid(12.0);
            l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        Color {
            r: channel(0.0),
            g: channel(8.0),
            b: channel(4.0),
            a: 1.0,
        }
    }
}

// ============================================================================
// Rainbow spectrum (red → violet)
// ============================================================================

/// The fixed seven-band spectrum shared by the banded and crayon brushes.
pub const RAINBOW: [Color; 7] = [
    Color::from_rgb8(0xFF, 0x00, 0x00), // Red
    Color::from_rgb8(0xFF, 0x7F, 0x00), // Orange
    Color::from_rgb8(0xFF, 0xFF, 0x00), // Yellow
    Color::from_rgb8(0x00, 0xFF, 0x00), // Green
    Color::from_rgb8(0x00, 0x00, 0xFF), // Blue
    Color::from_rgb8(0x4B, 0x00, 0x82), // Indigo
    Color::from_rgb8(0x8B, 0x00, 0xFF), // Violet
];

/// Predefined white color, the default canvas background
pub const WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);

/// Predefined black color
pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);

/// Light paper tone
pub const CREAM: Color = Color::from_rgb8(0xFF, 0xFB, 0xEB);

/// Dark slate tone
pub const SLATE: Color = Color::from_rgb8(0x1E, 0x29, 0x3B);

/// Maps a color name (case-insensitive) to a predefined color.
///
/// Accepts the spectrum names plus `white`, `black`, `cream` and `slate`.
pub fn name_to_color(name: &str) -> Option<Color> {
    let color = match name.to_lowercase().as_str() {
        "red" => RAINBOW[0],
        "orange" => RAINBOW[1],
        "yellow" => RAINBOW[2],
        "green" => RAINBOW[3],
        "blue" => RAINBOW[4],
        "indigo" => RAINBOW[5],
        "violet" => RAINBOW[6],
        "white" => WHITE,
        "black" => BLACK,
        "cream" => CREAM,
        "slate" => SLATE,
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_display_matches_css() {
        assert_eq!(Hsl::vivid(0.0).to_string(), "hsl(0,100%,50%)");
        assert_eq!(Hsl::vivid(4.0).to_string(), "hsl(4,100%,50%)");
    }

    #[test]
    fn hsl_primary_hues_convert_to_pure_channels() {
        assert_eq!(Color::from(Hsl::vivid(0.0)).to_rgb8(), [255, 0, 0]);
        assert_eq!(Color::from(Hsl::vivid(120.0)).to_rgb8(), [0, 255, 0]);
        assert_eq!(Color::from(Hsl::vivid(240.0)).to_rgb8(), [0, 0, 255]);
        assert_eq!(Color::from(Hsl::vivid(60.0)).to_rgb8(), [255, 255, 0]);
    }

    #[test]
    fn hsl_wraps_out_of_range_hue() {
        assert_eq!(
            Color::from(Hsl::vivid(360.0)),
            Color::from(Hsl::vivid(0.0))
        );
    }

    #[test]
    fn rainbow_is_ordered_red_to_violet() {
        assert_eq!(RAINBOW[0].to_rgb8(), [0xFF, 0x00, 0x00]);
        assert_eq!(RAINBOW[5].to_rgb8(), [0x4B, 0x00, 0x82]);
        assert_eq!(RAINBOW[6].to_rgb8(), [0x8B, 0x00, 0xFF]);
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(name_to_color("White"), Some(WHITE));
        assert_eq!(name_to_color("VIOLET"), Some(RAINBOW[6]));
        assert_eq!(name_to_color("mauve"), None);
    }
}
