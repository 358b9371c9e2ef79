//! Cross-fading one animation into another.
//!
//! Frames before the start frame come from the first animation, frames from
//! the crossover on come from the second, and frames in between are a linear
//! per-channel mix.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, SheetError};
use crate::frame::Frame;
use crate::sequence::FrameSequence;

/// Options for [`blend_animations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlendOptions {
    /// Name of the first animation; names the output directory and files.
    pub name: String,
    /// Last position that is still purely the first animation.
    pub start_frame: usize,
    /// First position that is purely the second animation.
    pub crossover_frame: usize,
    /// Cycle length for repeating blends; 0 disables wrapping.
    pub animation_length: usize,
}

impl BlendOptions {
    /// Non-cyclic blend over `start_frame..crossover_frame`.
    pub fn new(name: impl Into<String>, start_frame: usize, crossover_frame: usize) -> Self {
        Self {
            name: name.into(),
            start_frame,
            crossover_frame,
            animation_length: 0,
        }
    }

    /// Directory that receives the blended frames.
    pub fn output_dir(&self, out_root: &Path) -> PathBuf {
        out_root.join(format!("{}_blended", self.name))
    }

    /// File name of the i-th (1-based) blended frame.
    pub fn frame_file_name(&self, index: usize) -> String {
        format!("{}_blended_{:04}.png", self.name, index)
    }

    fn check(&self, first: usize, second: usize) -> Result<()> {
        if first != second {
            return Err(SheetError::MismatchedAnimationLengths { first, second });
        }
        Ok(())
    }
}

/// Source of one output frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlendWeight {
    /// Frame of the first animation, unchanged.
    First,
    /// Frame of the second animation, unchanged.
    Second,
    /// `(1 - t) * first + t * second`.
    Mix(f64),
}

/// Cycle positions for each output frame, 1-based `i` mapped to `k`.
///
/// Without a cycle length `k = i`. With one, `k` counts up each frame and
/// wraps to 0 when it reaches the cycle length.
pub fn cycle_positions(count: usize, animation_length: usize) -> Vec<usize> {
    if animation_length == 0 {
        return (1..=count).collect();
    }
    let mut k = 0;
    (0..count)
        .map(|_| {
            k += 1;
            if k == animation_length {
                k = 0;
            }
            k
        })
        .collect()
}

/// Decide the source of the frame at cycle position `k`.
///
/// A crossover at or before the start frame is a hard cut: no position
/// falls strictly between the two.
pub fn blend_weight(k: usize, options: &BlendOptions) -> BlendWeight {
    if k <= options.start_frame {
        BlendWeight::First
    } else if k >= options.crossover_frame {
        BlendWeight::Second
    } else {
        let t = (k - options.start_frame) as f64
            / (options.crossover_frame - options.start_frame) as f64;
        BlendWeight::Mix(t)
    }
}

/// Per-pixel linear mix of two equally sized frames.
pub fn mix_frames(first: &Frame, second: &Frame, t: f64) -> Frame {
    let data = first
        .data
        .iter()
        .zip(&second.data)
        .map(|(a, b)| a.lerp(b, t))
        .collect();
    Frame {
        width: first.width,
        height: first.height,
        data,
    }
}

/// Blend two animations frame by frame and write the result.
///
/// Writes `<out_root>/<name>_blended/<name>_blended_NNNN.png` for every
/// input pair and returns the written paths in order.
///
/// # Errors
/// Fails before writing anything when the animations differ in length. A
/// mixed pair whose frames differ in size fails with `FrameSizeMismatch`.
pub fn blend_animations(
    first: &FrameSequence,
    second: &FrameSequence,
    out_root: &Path,
    options: &BlendOptions,
) -> Result<Vec<PathBuf>> {
    options.check(first.len(), second.len())?;

    let out_dir = options.output_dir(out_root);
    if out_dir.is_dir() {
        info!(dir = %out_dir.display(), "blend output directory already exists");
    } else {
        std::fs::create_dir_all(&out_dir).map_err(|e| SheetError::io(&out_dir, e))?;
    }

    let positions = cycle_positions(first.len(), options.animation_length);
    let mut written = Vec::with_capacity(first.len());

    for (i, ((path_a, path_b), k)) in first.iter().zip(second.iter()).zip(positions).enumerate() {
        let weight = blend_weight(k, options);
        let frame = match weight {
            BlendWeight::First => Frame::load(path_a)?,
            BlendWeight::Second => Frame::load(path_b)?,
            BlendWeight::Mix(t) => {
                let a = Frame::load(path_a)?;
                let b = Frame::load(path_b)?;
                if a.dimensions() != b.dimensions() {
                    return Err(SheetError::FrameSizeMismatch {
                        path: path_b.to_path_buf(),
                        width: b.width,
                        height: b.height,
                        cell_width: a.width,
                        cell_height: a.height,
                    });
                }
                mix_frames(&a, &b, t)
            }
        };

        let path = out_dir.join(options.frame_file_name(i + 1));
        frame.save_png(&path)?;
        debug!(frame = %path.display(), k, ?weight, "wrote blended frame");
        written.push(path);
    }

    info!(
        dir = %out_dir.display(),
        frames = written.len(),
        "wrote blended animation"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_reference_weights() {
        let options = BlendOptions::new("walk", 2, 5);
        let weights: Vec<_> = cycle_positions(8, 0)
            .into_iter()
            .map(|k| blend_weight(k, &options))
            .collect();

        assert_eq!(weights[0], BlendWeight::First);
        assert_eq!(weights[1], BlendWeight::First);
        match (weights[2], weights[3]) {
            (BlendWeight::Mix(a), BlendWeight::Mix(b)) => {
                assert!((a - 1.0 / 3.0).abs() < 1e-12);
                assert!((b - 2.0 / 3.0).abs() < 1e-12);
            }
            other => panic!("expected mixes, got {:?}", other),
        }
        for w in &weights[4..] {
            assert_eq!(*w, BlendWeight::Second);
        }
    }

    #[test]
    fn test_cycle_positions_wrap() {
        assert_eq!(cycle_positions(5, 0), vec![1, 2, 3, 4, 5]);
        assert_eq!(cycle_positions(7, 3), vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_mix_frames_endpoints() {
        let a = Frame::new(2, 2, Color::rgba(1.0, 0.0, 0.0, 1.0));
        let b = Frame::new(2, 2, Color::rgba(0.0, 0.0, 1.0, 0.0));
        assert_eq!(mix_frames(&a, &b, 0.0), a);
        assert_eq!(mix_frames(&a, &b, 1.0), b);
        let mid = mix_frames(&a, &b, 0.5);
        assert_eq!(mid.get(1, 1), Color::rgba(0.5, 0.0, 0.5, 0.5));
    }

    #[test]
    fn test_check_rejects_bad_input() {
        let options = BlendOptions::new("walk", 2, 5);
        assert!(matches!(
            options.check(8, 6),
            Err(SheetError::MismatchedAnimationLengths {
                first: 8,
                second: 6
            })
        ));
        assert!(options.check(8, 8).is_ok());
    }

    #[test]
    fn test_hard_cut_weights() {
        let cut = BlendOptions::new("walk", 2, 2);
        let weights: Vec<_> = cycle_positions(4, 0)
            .into_iter()
            .map(|k| blend_weight(k, &cut))
            .collect();
        assert_eq!(
            weights,
            vec![
                BlendWeight::First,
                BlendWeight::First,
                BlendWeight::Second,
                BlendWeight::Second
            ]
        );

        // crossover before start: everything up to start stays first
        let inverted = BlendOptions::new("walk", 3, 1);
        assert_eq!(blend_weight(1, &inverted), BlendWeight::First);
        assert_eq!(blend_weight(3, &inverted), BlendWeight::First);
        assert_eq!(blend_weight(4, &inverted), BlendWeight::Second);
    }

    #[test]
    fn test_file_names() {
        let options = BlendOptions::new("Walk", 1, 3);
        assert_eq!(options.frame_file_name(7), "Walk_blended_0007.png");
        assert_eq!(
            options.output_dir(Path::new("out")),
            PathBuf::from("out/Walk_blended")
        );
    }
}
