//! Background cleanup.
//!
//! Renderers leave faint alpha and near-black color in what should be empty
//! background. Clearing it keeps sheet backgrounds fully transparent.

use crate::frame::Frame;

/// RGB channels of fully transparent pixels below this value are zeroed.
pub const FLOOR_EPSILON: f64 = 0.005;

/// Clear near-transparent alpha and floor the color of transparent pixels.
///
/// Alpha below `cutoff` becomes 0. Any pixel whose alpha is then 0 has each
/// RGB channel below [`FLOOR_EPSILON`] set to 0. Everything else is untouched.
pub fn remove_floor(frame: &mut Frame, cutoff: f64) {
    for pixel in &mut frame.data {
        if pixel.a < cutoff {
            pixel.a = 0.0;
        }
        if pixel.a == 0.0 {
            for channel in [&mut pixel.r, &mut pixel.g, &mut pixel.b] {
                if *channel < FLOOR_EPSILON {
                    *channel = 0.0;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn single(color: Color) -> Frame {
        Frame::new(1, 1, color)
    }

    #[test]
    fn test_alpha_below_cutoff_cleared() {
        let mut frame = single(Color::rgba(0.5, 0.5, 0.5, 0.05));
        remove_floor(&mut frame, 0.1);
        assert_eq!(frame.get(0, 0), Color::rgba(0.5, 0.5, 0.5, 0.0));
    }

    #[test]
    fn test_dark_channels_floored_when_transparent() {
        let mut frame = single(Color::rgba(0.004, 0.005, 0.2, 0.01));
        remove_floor(&mut frame, 0.1);
        assert_eq!(frame.get(0, 0), Color::rgba(0.0, 0.005, 0.2, 0.0));
    }

    #[test]
    fn test_opaque_pixels_untouched() {
        let original = Color::rgba(0.001, 0.002, 0.003, 0.1);
        let mut frame = single(original);
        remove_floor(&mut frame, 0.1);
        assert_eq!(frame.get(0, 0), original);
    }

    #[test]
    fn test_already_transparent_floored_with_zero_cutoff() {
        let mut frame = single(Color::rgba(0.001, 0.9, 0.0049, 0.0));
        remove_floor(&mut frame, 0.0);
        assert_eq!(frame.get(0, 0), Color::rgba(0.0, 0.9, 0.0, 0.0));
    }

    #[test]
    fn test_cleanup_property_over_grid() {
        let cutoff = 0.3;
        let values = [0.0, 0.001, 0.0049, 0.005, 0.1, 0.29, 0.3, 0.7, 1.0];
        for &alpha in &values {
            for &channel in &values {
                let original = Color::rgba(channel, channel, 1.0 - channel, alpha);
                let mut frame = single(original);
                remove_floor(&mut frame, cutoff);
                let result = frame.get(0, 0);

                if alpha < cutoff {
                    assert_eq!(result.a, 0.0);
                } else {
                    assert_eq!(result.a, alpha);
                }
                for (before, after) in [
                    (original.r, result.r),
                    (original.g, result.g),
                    (original.b, result.b),
                ] {
                    if result.a == 0.0 && before < FLOOR_EPSILON {
                        assert_eq!(after, 0.0);
                    } else {
                        assert_eq!(after, before);
                    }
                }
            }
        }
    }
}
