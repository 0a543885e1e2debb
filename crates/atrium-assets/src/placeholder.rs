//! Deterministic gradient placeholders.

use image::{Rgba, RgbaImage};

/// Placeholder width in pixels.
pub const PLACEHOLDER_WIDTH: u32 = 512;
/// Placeholder height in pixels (portrait, matching the frame aspect).
pub const PLACEHOLDER_HEIGHT: u32 = 910;

/// Hue step between consecutive frame indices, in degrees.
const HUE_STEP: u32 = 37;

/// Generate the placeholder for a frame index: a diagonal three-stop
/// gradient whose base hue is `index * 37 mod 360`, so neighbors get
/// visibly different art and the same index always gets the same image.
#[must_use]
pub fn placeholder_art(index: usize) -> RgbaImage {
    let hue = (index as u32 * HUE_STEP % 360) as f32;
    let stops = [
        hsl_to_rgb(hue, 0.40, 0.25),
        hsl_to_rgb((hue + 60.0) % 360.0, 0.50, 0.35),
        hsl_to_rgb((hue + 120.0) % 360.0, 0.45, 0.30),
    ];

    RgbaImage::from_fn(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, |x, y| {
        let t = (x as f32 / (PLACEHOLDER_WIDTH - 1) as f32
            + y as f32 / (PLACEHOLDER_HEIGHT - 1) as f32)
            / 2.0;
        let rgb = if t < 0.5 {
            lerp_rgb(stops[0], stops[1], t * 2.0)
        } else {
            lerp_rgb(stops[1], stops[2], (t - 0.5) * 2.0)
        };
        Rgba([rgb[0], rgb[1], rgb[2], 255])
    })
}

fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_dimensions() {
        let img = placeholder_art(0);
        assert_eq!(img.width(), PLACEHOLDER_WIDTH);
        assert_eq!(img.height(), PLACEHOLDER_HEIGHT);
    }

    #[test]
    fn test_same_index_is_deterministic() {
        assert_eq!(placeholder_art(7), placeholder_art(7));
    }

    #[test]
    fn test_neighboring_indices_differ() {
        assert_ne!(placeholder_art(0), placeholder_art(1));
    }

    #[test]
    fn test_hue_wraps_after_full_cycle() {
        // 360 / gcd(37, 360) = 360, so indices 0 and 360 share a hue.
        let a = placeholder_art(0);
        let b = placeholder_art(360);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fully_opaque() {
        let img = placeholder_art(3);
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), [0, 0, 255]);
    }
}
