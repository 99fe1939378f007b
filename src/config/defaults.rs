use super::*;

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            animation: AnimationSettings::default(),
            style: StyleSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            trail_count: 24,
            dot_rate: 0.55,
            ring_rate: 0.12,
            ring_scale_rate: 0.10,
            trail_head_rate: 0.38,
            trail_tail_rate: 0.06,
            hover_scale: 1.15,
            refresh_hz: 60,
        }
    }
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            dot_size: 6.0,
            ring_size: 36.0,
            ring_stroke: 1.5,
            color: [0, 229, 255], // cyan accent
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        let save_dir = dirs::picture_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("CometTrail");
        Self {
            width: 1920,
            height: 1080,
            save_directory: save_dir.to_string_lossy().to_string(),
        }
    }
}
