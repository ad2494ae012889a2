//! Fixed visual theme: palette, text metrics, and camera limits.
//!
//! Every value here is a hand-picked constant; there is no runtime
//! configuration surface.

use std::f32::consts::PI;

/// Scene background.
pub const BACKGROUND_HEX: u32 = 0x121212;

/// Panel fill while idle.
pub const PANEL_BASE_HEX: u32 = 0x311b92;
/// Panel fill while the pointer is over it.
pub const PANEL_HOVER_HEX: u32 = 0x4a148c;
/// Panels are semi-transparent so the rest of the gallery shows through.
pub const PANEL_OPACITY: f32 = 0.8;

pub const TITLE_HEX: u32 = 0xbb86fc;
pub const TITLE_FONT_SIZE: f32 = 0.35;
/// Distance from the panel's top edge down to the title anchor.
pub const TITLE_TOP_OFFSET: f32 = 0.3;

pub const BODY_HEX: u32 = 0xffffff;
pub const BODY_FONT_SIZE: f32 = 0.16;
pub const BODY_LINE_HEIGHT: f32 = 1.4;
/// Vertical step between stacked body lines.
pub const LINE_STEP: f32 = 0.22;
/// Inset of the body block from the panel's left edge.
pub const BODY_LEFT_INSET: f32 = 0.25;
/// Distance from the panel's top edge down to the first body line.
pub const BODY_TOP_OFFSET: f32 = 0.8;
/// Body text wraps to `panel_width - WRAP_MARGIN`.
pub const WRAP_MARGIN: f32 = 0.5;
/// Text and quads would z-fight on the same plane; text sits this far in
/// front of its panel.
pub const SURFACE_LIFT: f32 = 0.01;

pub const HEADER_NAME_HEX: u32 = 0xffffff;
pub const HEADER_NAME_FONT_SIZE: f32 = 0.6;
pub const HEADER_CONTACT_HEX: u32 = 0xcccccc;
pub const HEADER_CONTACT_FONT_SIZE: f32 = 0.2;

pub const AMBIENT_INTENSITY: f32 = 0.7;
pub const ACCENT_LIGHT_HEX: u32 = 0xbb86fc;

pub const CAMERA_EYE: [f32; 3] = [0.0, 0.5, 0.1];
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
/// Zoom range toward/away from the gallery center.
pub const CAMERA_MIN_DISTANCE: f32 = 1.0;
pub const CAMERA_MAX_DISTANCE: f32 = 8.0;
/// Polar-angle limits keep the orbit above the floor and below the ceiling.
pub const CAMERA_MIN_POLAR_RAD: f32 = PI / 3.0;
pub const CAMERA_MAX_POLAR_RAD: f32 = PI / 1.8;

/// Expands a 24-bit `0xRRGGBB` code into float RGB channels.
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Expands a 24-bit `0xRRGGBB` code into float RGBA with the given alpha.
pub fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
    let [r, g, b] = rgb(hex);
    [r, g, b, alpha]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_expands_channels() {
        assert_eq!(rgb(0xffffff), [1.0, 1.0, 1.0]);
        assert_eq!(rgb(0x000000), [0.0, 0.0, 0.0]);

        let [r, g, b] = rgb(0x311b92);
        assert!((r - 49.0 / 255.0).abs() < 1e-6);
        assert!((g - 27.0 / 255.0).abs() < 1e-6);
        assert!((b - 146.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rgba_carries_alpha_through() {
        assert_eq!(rgba(0xffffff, 0.8), [1.0, 1.0, 1.0, 0.8]);
    }
}
