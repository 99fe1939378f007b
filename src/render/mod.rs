pub mod frame;

use std::sync::{Arc, Mutex};

/// Where the animated positions go each frame. Implementations decide how
/// to draw (CSS transforms, a canvas, a raster frame buffer). The engine
/// only calls setters and never assumes a rendering technology.
pub trait OutputSink {
    fn set_dot(&mut self, x: f64, y: f64);
    fn set_ring(&mut self, x: f64, y: f64, scale: f64);
    fn set_trail_slot(&mut self, index: usize, x: f64, y: f64);
    /// Show or hide everything (pointer entered/left the surface).
    fn set_visible(&mut self, visible: bool);
    /// Hover styling hook (e.g. toggling a CSS class).
    fn set_hovering(&mut self, hovering: bool);
}

/// Shared-sink forwarding: lets the host keep a handle to a concrete
/// sink (to read frames back out) while the controller owns a boxed one.
/// A poisoned lock drops the write; the next frame retries.
impl<S: OutputSink> OutputSink for Arc<Mutex<S>> {
    fn set_dot(&mut self, x: f64, y: f64) {
        if let Ok(mut sink) = self.lock() {
            sink.set_dot(x, y);
        }
    }

    fn set_ring(&mut self, x: f64, y: f64, scale: f64) {
        if let Ok(mut sink) = self.lock() {
            sink.set_ring(x, y, scale);
        }
    }

    fn set_trail_slot(&mut self, index: usize, x: f64, y: f64) {
        if let Ok(mut sink) = self.lock() {
            sink.set_trail_slot(index, x, y);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if let Ok(mut sink) = self.lock() {
            sink.set_visible(visible);
        }
    }

    fn set_hovering(&mut self, hovering: bool) {
        if let Ok(mut sink) = self.lock() {
            sink.set_hovering(hovering);
        }
    }
}

/// Per-slot visual parameters for the comet tail. Pure function of slot
/// index and total count: the head is large and bright, the tail shrinks
/// and fades to near-transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailStyle {
    /// Dot diameter in pixels.
    pub size: f64,
    /// Fill opacity, 0..1.
    pub alpha: f64,
    /// Glow halo opacity, 0..1.
    pub glow_alpha: f64,
    /// Glow halo radius beyond the dot edge, in pixels.
    pub glow_size: f64,
}

impl TrailStyle {
    pub fn for_slot(index: usize, count: usize) -> Self {
        let progress = if count <= 1 {
            0.0
        } else {
            index as f64 / (count - 1) as f64
        };
        let alpha = 0.7 - progress * 0.65;
        Self {
            size: 8.0 - progress * 6.0,
            alpha,
            glow_alpha: alpha * 0.5,
            glow_size: (6.0 - progress * 5.0).max(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_slot_style() {
        let s = TrailStyle::for_slot(0, 24);
        assert_eq!(s.size, 8.0);
        assert_eq!(s.alpha, 0.7);
        assert_eq!(s.glow_alpha, 0.35);
        assert_eq!(s.glow_size, 6.0);
    }

    #[test]
    fn test_tail_slot_style() {
        let s = TrailStyle::for_slot(23, 24);
        assert!((s.size - 2.0).abs() < 1e-12);
        assert!((s.alpha - 0.05).abs() < 1e-12);
        assert_eq!(s.glow_size, 1.0, "glow radius is floored at 1px");
    }

    #[test]
    fn test_style_shrinks_and_fades_monotonically() {
        let count = 24;
        for i in 0..count - 1 {
            let a = TrailStyle::for_slot(i, count);
            let b = TrailStyle::for_slot(i + 1, count);
            assert!(a.size > b.size);
            assert!(a.alpha > b.alpha);
            assert!(a.glow_size >= b.glow_size);
        }
    }
}
