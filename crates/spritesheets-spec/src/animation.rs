//! Per-animation records.
//!
//! Each animation in a batch is described by exactly one [`AnimationEntry`].
//! The same record drives sheet packing (window, stride, eight-way split) and
//! descriptor emission (name, loop, speed, frame count).

use serde::{Deserialize, Serialize};

/// Number of directional groups in an eight-way animation.
pub const EIGHT_WAY_DIRECTIONS: usize = 8;

/// One animation in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationEntry {
    /// Animation name; also the name of its frame directory.
    pub name: String,

    /// Whether the frames hold eight consecutive direction groups.
    #[serde(default)]
    pub eight_way: bool,

    /// Whether the animation loops in the engine.
    #[serde(rename = "loop", default = "default_loop")]
    pub looping: bool,

    /// Playback speed in frames per second.
    #[serde(default = "default_speed")]
    pub speed: f64,

    /// Optional centered crop window `[width, height]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<[u32; 2]>,

    /// Number of frames the engine plays (per direction for eight-way).
    pub frame_count: usize,

    /// Keep every `stride`-th rendered frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stride: Option<usize>,
}

fn default_loop() -> bool {
    true
}

fn default_speed() -> f64 {
    10.0
}

impl AnimationEntry {
    /// Creates a looping, single-direction entry at the default speed.
    pub fn new(name: impl Into<String>, frame_count: usize) -> Self {
        Self {
            name: name.into(),
            eight_way: false,
            looping: default_loop(),
            speed: default_speed(),
            window: None,
            frame_count,
            stride: None,
        }
    }

    /// Marks the entry as eight-way.
    pub fn eight_way(mut self) -> Self {
        self.eight_way = true;
        self
    }

    /// Sets the loop flag.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Sets the playback speed.
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the crop window.
    pub fn window(mut self, width: u32, height: u32) -> Self {
        self.window = Some([width, height]);
        self
    }

    /// Sets the frame stride.
    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = Some(stride);
        self
    }

    /// Crop window as a `(width, height)` tuple.
    pub fn window_size(&self) -> Option<(u32, u32)> {
        self.window.map(|[w, h]| (w, h))
    }

    /// Total frames packed for this entry across all directions.
    pub fn total_frames(&self) -> usize {
        if self.eight_way {
            self.frame_count * EIGHT_WAY_DIRECTIONS
        } else {
            self.frame_count
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_from_json() {
        let entry: AnimationEntry =
            serde_json::from_str(r#"{"name": "Walk", "frame_count": 20}"#).unwrap();
        assert_eq!(entry, AnimationEntry::new("Walk", 20));
        assert!(entry.looping);
        assert_eq!(entry.speed, 10.0);
    }

    #[test]
    fn test_loop_key_is_renamed() {
        let entry: AnimationEntry = serde_json::from_str(
            r#"{"name": "Die", "loop": false, "frame_count": 12, "window": [128, 96]}"#,
        )
        .unwrap();
        assert!(!entry.looping);
        assert_eq!(entry.window_size(), Some((128, 96)));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["loop"], serde_json::json!(false));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = serde_json::from_str::<AnimationEntry>(
            r#"{"name": "Walk", "frame_count": 20, "frames": []}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_total_frames_eight_way() {
        let entry = AnimationEntry::new("Walk", 20).eight_way();
        assert_eq!(entry.total_frames(), 160);
        assert_eq!(AnimationEntry::new("Idle", 20).total_frames(), 20);
    }
}
