//! Single owner of the cursor animation state. Input events and frame
//! ticks both land here; the host guarantees they never interleave
//! mid-tick (one cooperative loop, or an external mutex).

use super::chain::EasingChain;
use super::easing::Point;
use super::pointer::PointerTracker;
use crate::config::AnimationSettings;
use crate::render::OutputSink;

/// Classifies a host-specific hover target as interactive (link, button,
/// form control, explicitly marked element). Injected by the host so the
/// engine has no dependency on any UI-tree representation.
pub type InteractivePredicate<T> = Box<dyn Fn(&T) -> bool + Send>;

/// Point-in-time copy of everything the animator tracks.
#[derive(Debug, Clone)]
pub struct CursorState {
    pub raw_pointer: Point,
    pub dot: Point,
    pub ring: Point,
    pub ring_scale_current: f64,
    pub ring_scale_target: f64,
    pub trail: Vec<Point>,
    pub visible: bool,
    pub hovering: bool,
}

pub struct CursorController<T> {
    tracker: PointerTracker,
    chain: EasingChain,
    sink: Option<Box<dyn OutputSink + Send>>,
    is_interactive: InteractivePredicate<T>,
}

impl<T> CursorController<T> {
    pub fn new(settings: &AnimationSettings, is_interactive: InteractivePredicate<T>) -> Self {
        Self {
            tracker: PointerTracker::new(),
            chain: EasingChain::new(settings),
            sink: None,
            is_interactive,
        }
    }

    pub fn attach_sink(&mut self, sink: Box<dyn OutputSink + Send>) {
        self.sink = Some(sink);
    }

    pub fn detach_sink(&mut self) -> Option<Box<dyn OutputSink + Send>> {
        self.sink.take()
    }

    /// Pointer moved over `target` at (x, y).
    pub fn pointer_moved(&mut self, x: f64, y: f64, target: &T) {
        let interactive = (self.is_interactive)(target);
        let outcome = self.tracker.pointer_moved(x, y, interactive);

        if outcome.became_visible {
            // Snap before the next tick so the chain never eases in from
            // wherever it was parked.
            self.chain.snap_to(self.tracker.raw());
            if let Some(sink) = self.sink.as_deref_mut() {
                sink.set_visible(true);
            }
        }

        if let Some(hovering) = outcome.hover_changed {
            self.chain.set_hovering(hovering);
            if let Some(sink) = self.sink.as_deref_mut() {
                sink.set_hovering(hovering);
            }
        }
    }

    /// Pointer left the tracked surface.
    pub fn surface_left(&mut self) {
        self.tracker.surface_left();
        self.chain.set_hovering(false);
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.set_hovering(false);
            sink.set_visible(false);
        }
        log::debug!("pointer left surface");
    }

    /// Pointer re-entered the tracked surface; re-snap the whole chain.
    pub fn surface_entered(&mut self, x: f64, y: f64) {
        self.tracker.surface_entered(x, y);
        self.chain.snap_to(Point::new(x, y));
        log::debug!("pointer entered surface at ({:.1}, {:.1})", x, y);
    }

    /// One display frame: advance the chain, then push positions to the
    /// sink. With no sink attached the writes are skipped; the next tick
    /// retries.
    pub fn tick(&mut self) {
        self.chain.advance(self.tracker.raw());

        let Some(sink) = self.sink.as_deref_mut() else {
            return;
        };
        sink.set_dot(self.chain.dot.position.x, self.chain.dot.position.y);
        sink.set_ring(
            self.chain.ring.position.x,
            self.chain.ring.position.y,
            self.chain.ring_scale.current,
        );
        for (i, slot) in self.chain.trail.iter().enumerate() {
            sink.set_trail_slot(i, slot.position.x, slot.position.y);
        }
    }

    pub fn state(&self) -> CursorState {
        CursorState {
            raw_pointer: self.tracker.raw(),
            dot: self.chain.dot.position,
            ring: self.chain.ring.position,
            ring_scale_current: self.chain.ring_scale.current,
            ring_scale_target: self.chain.ring_scale.target,
            trail: self.chain.trail.iter().map(|s| s.position).collect(),
            visible: self.tracker.is_visible(),
            hovering: self.tracker.is_hovering(),
        }
    }
}
