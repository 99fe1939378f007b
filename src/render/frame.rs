//! Reference output sink: rasterizes the cursor into RGBA frames.
//!
//! Draw order is tail-to-head so the bright head dots cover the faded
//! tail, then the ring, then the center dot on top.

use super::{OutputSink, TrailStyle};
use crate::config::{OutputSettings, StyleSettings};
use image::{Rgba, RgbaImage};

pub struct FrameRenderer {
    width: u32,
    height: u32,
    style: StyleSettings,
    trail_styles: Vec<TrailStyle>,
    dot: Option<(f64, f64)>,
    ring: Option<(f64, f64, f64)>,
    trail: Vec<Option<(f64, f64)>>,
    visible: bool,
    hovering: bool,
}

impl FrameRenderer {
    pub fn new(output: &OutputSettings, style: &StyleSettings, trail_count: usize) -> Self {
        let trail_styles = (0..trail_count)
            .map(|i| TrailStyle::for_slot(i, trail_count))
            .collect();
        Self {
            width: output.width,
            height: output.height,
            style: style.clone(),
            trail_styles,
            dot: None,
            ring: None,
            trail: vec![None; trail_count],
            visible: false,
            hovering: false,
        }
    }

    /// Rasterize the current positions into a fresh transparent frame.
    pub fn render(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width, self.height);
        if !self.visible {
            return img;
        }

        let [r, g, b] = self.style.color;

        // Tail first, head last.
        for i in (0..self.trail.len()).rev() {
            let Some((x, y)) = self.trail[i] else {
                continue;
            };
            let ts = &self.trail_styles[i];
            let radius = ts.size / 2.0;
            let glow_alpha = (ts.glow_alpha * 255.0) as u8;
            let fill_alpha = (ts.alpha * 255.0) as u8;
            draw_glow(&mut img, x, y, radius + ts.glow_size, [r, g, b, glow_alpha]);
            draw_filled_circle(&mut img, x, y, radius, [r, g, b, fill_alpha]);
        }

        if let Some((x, y, scale)) = self.ring {
            let radius = self.style.ring_size / 2.0 * scale;
            let stroke = if self.hovering {
                self.style.ring_stroke * 1.5
            } else {
                self.style.ring_stroke
            };
            draw_stroked_circle(&mut img, x, y, radius, stroke, [r, g, b, 220]);
        }

        if let Some((x, y)) = self.dot {
            draw_filled_circle(&mut img, x, y, self.style.dot_size / 2.0, [r, g, b, 255]);
        }

        img
    }
}

impl OutputSink for FrameRenderer {
    fn set_dot(&mut self, x: f64, y: f64) {
        self.dot = Some((x, y));
    }

    fn set_ring(&mut self, x: f64, y: f64, scale: f64) {
        self.ring = Some((x, y, scale));
    }

    fn set_trail_slot(&mut self, index: usize, x: f64, y: f64) {
        if let Some(slot) = self.trail.get_mut(index) {
            *slot = Some((x, y));
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }
}

fn draw_filled_circle(img: &mut RgbaImage, x: f64, y: f64, radius: f64, color: [u8; 4]) {
    let cx = x as i32;
    let cy = y as i32;
    let r = radius.ceil() as i32 + 1;

    for dy in -r..=r {
        for dx in -r..=r {
            let dist = ((dx * dx + dy * dy) as f64).sqrt();
            if dist <= radius + 1.0 {
                // Anti-alias the last pixel of the edge.
                let coverage = (radius + 1.0 - dist).clamp(0.0, 1.0);
                let alpha = (color[3] as f64 * coverage) as u8;
                blend_pixel(img, cx + dx, cy + dy, [color[0], color[1], color[2], alpha]);
            }
        }
    }
}

fn draw_stroked_circle(
    img: &mut RgbaImage,
    x: f64,
    y: f64,
    radius: f64,
    stroke_width: f64,
    color: [u8; 4],
) {
    let cx = x as i32;
    let cy = y as i32;
    let r = radius as i32;
    let sw = (stroke_width * 0.5) as i32 + 1;

    for dy in -r - sw..=r + sw {
        for dx in -r - sw..=r + sw {
            let dist = ((dx * dx + dy * dy) as f64).sqrt();
            let edge_dist = (dist - radius).abs();
            if edge_dist <= stroke_width * 0.5 + 1.0 {
                let coverage = (stroke_width * 0.5 + 1.0 - edge_dist).clamp(0.0, 1.0);
                let alpha = (color[3] as f64 * coverage) as u8;
                blend_pixel(img, cx + dx, cy + dy, [color[0], color[1], color[2], alpha]);
            }
        }
    }
}

/// Soft halo: alpha falls off quadratically from center to the glow edge.
fn draw_glow(img: &mut RgbaImage, x: f64, y: f64, radius: f64, color: [u8; 4]) {
    let cx = x as i32;
    let cy = y as i32;
    let r = radius.ceil() as i32;

    for dy in -r..=r {
        for dx in -r..=r {
            let dist = ((dx * dx + dy * dy) as f64).sqrt();
            if dist <= radius {
                let falloff = 1.0 - dist / radius;
                let alpha = (color[3] as f64 * falloff * falloff) as u8;
                blend_pixel(img, cx + dx, cy + dy, [color[0], color[1], color[2], alpha]);
            }
        }
    }
}

fn blend_pixel(img: &mut RgbaImage, x: i32, y: i32, color: [u8; 4]) {
    if x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() {
        return;
    }
    if color[3] == 0 {
        return;
    }
    let src = Rgba(color);
    let dst = *img.get_pixel(x as u32, y as u32);
    img.put_pixel(x as u32, y as u32, blend(dst, src));
}

fn blend(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f64 / 255.0;
    let da = dst[3] as f64 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let r = (src[0] as f64 * sa + dst[0] as f64 * da * (1.0 - sa)) / out_a;
    let g = (src[1] as f64 * sa + dst[1] as f64 * da * (1.0 - sa)) / out_a;
    let b = (src[2] as f64 * sa + dst[2] as f64 * da * (1.0 - sa)) / out_a;
    Rgba([r as u8, g as u8, b as u8, (out_a * 255.0) as u8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppSettings;

    fn renderer() -> FrameRenderer {
        let settings = AppSettings::default();
        let mut out = settings.output.clone();
        out.width = 200;
        out.height = 100;
        FrameRenderer::new(&out, &settings.style, settings.animation.trail_count)
    }

    fn frame_has_ink(img: &RgbaImage) -> bool {
        img.pixels().any(|p| p[3] > 0)
    }

    #[test]
    fn test_hidden_frame_is_blank() {
        let mut r = renderer();
        r.set_dot(100.0, 50.0);
        r.set_ring(100.0, 50.0, 1.0);
        assert!(!frame_has_ink(&r.render()), "hidden sink must render nothing");
    }

    #[test]
    fn test_visible_frame_draws_cursor() {
        let mut r = renderer();
        r.set_visible(true);
        r.set_dot(100.0, 50.0);
        r.set_ring(100.0, 50.0, 1.0);
        for i in 0..24 {
            r.set_trail_slot(i, 100.0 - i as f64, 50.0);
        }
        let img = r.render();
        assert!(frame_has_ink(&img));
        // Dot center is fully opaque accent color.
        let center = img.get_pixel(100, 50);
        assert_eq!(center[3], 255);
    }

    #[test]
    fn test_offscreen_positions_are_clipped() {
        let mut r = renderer();
        r.set_visible(true);
        r.set_dot(-500.0, -500.0);
        r.set_ring(10_000.0, 10_000.0, 1.0);
        r.set_trail_slot(0, -50.0, 120.0);
        let img = r.render(); // must not panic
        assert!(!frame_has_ink(&img));
    }

    #[test]
    fn test_out_of_range_slot_index_ignored() {
        let mut r = renderer();
        r.set_trail_slot(999, 10.0, 10.0);
    }

    #[test]
    fn test_partial_edge_draw() {
        let mut r = renderer();
        r.set_visible(true);
        r.set_dot(0.0, 0.0); // quarter of the dot lands on the image
        assert!(frame_has_ink(&r.render()));
    }
}
