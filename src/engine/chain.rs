//! The easing chain: dot, ring, ring scale and the comet-tail trail.
//!
//! One `advance` call is one display frame. Update order within a frame
//! matters: the ring moves first, then the trail updates front-to-back so
//! every slot chases the freshly updated position ahead of it. Breaking
//! that order stretches the tail apart by one frame per slot.

use super::easing::{lerp, EasedPoint, EasedScalar, Point};
use crate::config::AnimationSettings;

/// Ring scale when not hovering an interactive target.
pub const SCALE_NORMAL: f64 = 1.0;

/// Parked position before the pointer has ever entered the surface.
const OFFSCREEN: Point = Point { x: -100.0, y: -100.0 };

/// One point of the comet tail. Slot 0 chases the ring; slot i chases
/// slot i-1.
#[derive(Debug, Clone)]
pub struct TrailSlot {
    pub position: Point,
    pub rate: f64,
}

#[derive(Debug, Clone)]
pub struct EasingChain {
    pub dot: EasedPoint,
    pub ring: EasedPoint,
    pub ring_scale: EasedScalar,
    pub trail: Vec<TrailSlot>,
    hover_scale: f64,
}

impl EasingChain {
    pub fn new(settings: &AnimationSettings) -> Self {
        let trail = (0..settings.trail_count)
            .map(|i| TrailSlot {
                position: OFFSCREEN,
                rate: settings.trail_rate(i),
            })
            .collect();

        Self {
            dot: EasedPoint::new(OFFSCREEN, settings.dot_rate),
            ring: EasedPoint::new(OFFSCREEN, settings.ring_rate),
            ring_scale: EasedScalar::new(SCALE_NORMAL, settings.ring_scale_rate),
            trail,
            hover_scale: settings.hover_scale,
        }
    }

    /// Advance every tracked point one frame toward the raw pointer.
    pub fn advance(&mut self, raw_pointer: Point) {
        self.dot.step(raw_pointer);
        self.ring.step(raw_pointer);
        self.ring_scale.step();

        // Strict front-to-back: each slot reads the position updated
        // this same frame, not last frame's.
        let mut prev = self.ring.position;
        for slot in &mut self.trail {
            slot.position.x = lerp(slot.position.x, prev.x, slot.rate);
            slot.position.y = lerp(slot.position.y, prev.y, slot.rate);
            prev = slot.position;
        }
    }

    /// Set every tracked position to `p` instantly. Used on surface
    /// (re)entry so the chain never flies in from across the screen.
    /// The ring scale keeps easing; only positions snap.
    pub fn snap_to(&mut self, p: Point) {
        self.dot.snap(p);
        self.ring.snap(p);
        for slot in &mut self.trail {
            slot.position = p;
        }
    }

    /// Retarget the ring scale for a hover transition.
    pub fn set_hovering(&mut self, hovering: bool) {
        let target = if hovering {
            self.hover_scale
        } else {
            SCALE_NORMAL
        };
        self.ring_scale.set_target(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> EasingChain {
        EasingChain::new(&AnimationSettings::default())
    }

    #[test]
    fn test_trail_slot_rates_match_taper() {
        let c = chain();
        assert_eq!(c.trail.len(), 24);
        assert_eq!(c.trail[0].rate, 0.38);
        assert!((c.trail[23].rate - 0.06).abs() < 1e-12);
        for w in c.trail.windows(2) {
            assert!(w[0].rate >= w[1].rate, "taper must be non-increasing");
        }
    }

    #[test]
    fn test_advance_is_sequential_within_one_frame() {
        let mut c = chain();
        // Ring already at the pointer: its position is unchanged by the
        // advance, isolating the trail ordering.
        let p = Point::new(100.0, 100.0);
        c.ring.snap(p);
        c.dot.snap(p);
        for slot in &mut c.trail {
            slot.position = Point::new(0.0, 0.0);
        }

        c.advance(p);

        // Slot 0 closed 38% of the way to the ring.
        assert!((c.trail[0].position.x - 38.0).abs() < 1e-9);

        // Slot 1 chased slot 0's POST-advance position (38,38), not its
        // pre-advance (0,0): rate(1) = 0.38 - (1/23)*0.32.
        let rate1 = 0.38 - (1.0 / 23.0) * 0.32;
        let expected1 = 38.0 * rate1;
        assert!(
            (c.trail[1].position.x - expected1).abs() < 1e-9,
            "slot 1 should read slot 0's updated position: expected {} got {}",
            expected1,
            c.trail[1].position.x
        );
    }

    #[test]
    fn test_dot_outruns_ring_outruns_tail() {
        let mut c = chain();
        c.snap_to(Point::new(0.0, 0.0));
        let target = Point::new(1000.0, 0.0);
        for _ in 0..10 {
            c.advance(target);
        }
        assert!(c.dot.position.x > c.ring.position.x);
        assert!(c.ring.position.x > c.trail[0].position.x);
        assert!(c.trail[0].position.x > c.trail[23].position.x);
    }

    #[test]
    fn test_snap_to_sets_every_position() {
        let mut c = chain();
        let target = Point::new(640.0, 360.0);
        for _ in 0..5 {
            c.advance(Point::new(50.0, 900.0));
        }

        c.snap_to(target);

        assert_eq!(c.dot.position, target);
        assert_eq!(c.ring.position, target);
        for (i, slot) in c.trail.iter().enumerate() {
            assert_eq!(slot.position, target, "slot {} did not snap", i);
        }
    }

    #[test]
    fn test_hover_retargets_ring_scale() {
        let mut c = chain();
        c.set_hovering(true);
        assert_eq!(c.ring_scale.target, 1.15);
        c.set_hovering(false);
        assert_eq!(c.ring_scale.target, SCALE_NORMAL);
    }

    #[test]
    fn test_ring_scale_eases_not_snaps() {
        let mut c = chain();
        c.set_hovering(true);
        c.advance(Point::new(0.0, 0.0));
        // One frame at rate 0.10 closes 10% of the 0.15 gap.
        assert!((c.ring_scale.current - 1.015).abs() < 1e-9);
    }

    #[test]
    fn test_stationary_chain_collapses_onto_pointer() {
        let mut c = chain();
        c.snap_to(Point::new(0.0, 0.0));
        let target = Point::new(300.0, 200.0);
        for _ in 0..400 {
            c.advance(target);
        }
        assert!(
            c.trail[23].position.distance_to(target) < 0.01,
            "tail should settle on a stationary pointer, got {:?}",
            c.trail[23].position
        );
    }
}
