pub mod defaults;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub style: StyleSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Tuning for the easing chain. The defaults give the classic
/// comet-tail feel; all rates are per-frame lerp factors in (0,1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationSettings {
    /// Number of trail slots behind the ring.
    pub trail_count: usize,
    /// Dot follow rate (near-instant).
    pub dot_rate: f64,
    /// Ring follow rate (smooth lag).
    pub ring_rate: f64,
    /// Ring scale easing rate.
    pub ring_scale_rate: f64,
    /// Trail slot 0 follow rate; the taper runs from here down.
    pub trail_head_rate: f64,
    /// Last trail slot follow rate.
    pub trail_tail_rate: f64,
    /// Ring scale target while over an interactive element.
    pub hover_scale: f64,
    /// Frame rate for the built-in refresh clock.
    #[serde(default = "default_refresh_hz")]
    pub refresh_hz: u32,
}

fn default_refresh_hz() -> u32 {
    60
}

impl AnimationSettings {
    /// Per-slot trail rate: linear taper from `trail_head_rate` at slot 0
    /// down to `trail_tail_rate` at the last slot.
    pub fn trail_rate(&self, index: usize) -> f64 {
        if self.trail_count <= 1 {
            return self.trail_head_rate;
        }
        let progress = index as f64 / (self.trail_count - 1) as f64;
        self.trail_head_rate - progress * (self.trail_head_rate - self.trail_tail_rate)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleSettings {
    pub dot_size: f64,
    pub ring_size: f64,
    pub ring_stroke: f64,
    /// Accent color shared by dot, ring and trail.
    pub color: [u8; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    pub width: u32,
    pub height: u32,
    pub save_directory: String,
}

impl AppSettings {
    /// Load settings from a JSON file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Metadata written next to a completed offline render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderMeta {
    pub version: u32,
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub start_time: String,
    pub duration_ms: u64,
    pub frame_count: u32,
    pub trail_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_rate_taper_endpoints() {
        let anim = AnimationSettings::default();
        assert_eq!(anim.trail_rate(0), 0.38);
        let last = anim.trail_rate(anim.trail_count - 1);
        assert!(
            (last - 0.06).abs() < 1e-12,
            "tail rate should be 0.06, got {}",
            last
        );
    }

    #[test]
    fn test_trail_rate_monotonic_non_increasing() {
        let anim = AnimationSettings::default();
        for i in 0..anim.trail_count - 1 {
            assert!(
                anim.trail_rate(i) >= anim.trail_rate(i + 1),
                "rate({}) < rate({})",
                i,
                i + 1
            );
        }
    }

    #[test]
    fn test_trail_rate_single_slot() {
        let mut anim = AnimationSettings::default();
        anim.trail_count = 1;
        assert_eq!(anim.trail_rate(0), anim.trail_head_rate);
    }

    #[test]
    fn test_settings_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = AppSettings::default();
        settings.animation.trail_count = 12;
        settings.style.color = [255, 0, 128];
        settings.save(&path).unwrap();

        let loaded = AppSettings::load(&path).unwrap();
        assert_eq!(loaded.animation.trail_count, 12);
        assert_eq!(loaded.style.color, [255, 0, 128]);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppSettings::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(loaded.animation.trail_count, 24);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"style": {"dot_size": 10.0, "ring_size": 36.0, "ring_stroke": 2.0, "color": [0, 229, 255]}}"#,
        )
        .unwrap();

        let loaded = AppSettings::load(&path).unwrap();
        assert_eq!(loaded.style.dot_size, 10.0);
        assert_eq!(loaded.animation.trail_count, 24);
        assert_eq!(loaded.output.width, 1920);
    }
}
