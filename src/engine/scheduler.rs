//! Frame loop: one controller tick per display frame until stopped.
//!
//! The tick source is a `FrameClock` supplied by the host, so the easing
//! math stays decoupled from any particular refresh signal. The built-in
//! `RefreshClock` paces a worker thread at a fixed rate for hosts without
//! a native per-frame callback.

use super::controller::CursorController;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Source of display-frame signals.
pub trait FrameClock: Send {
    /// Block until the next frame. Returning `false` means the host will
    /// deliver no more frames and the loop ends.
    fn wait_next_frame(&mut self) -> bool;
}

/// Wall-clock pacer at a fixed refresh rate. Absorbs drift rather than
/// bursting to catch up after a stall.
pub struct RefreshClock {
    period: Duration,
    next: Instant,
}

impl RefreshClock {
    pub fn new(refresh_hz: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / refresh_hz.max(1) as f64);
        Self {
            period,
            next: Instant::now() + period,
        }
    }
}

impl FrameClock for RefreshClock {
    fn wait_next_frame(&mut self) -> bool {
        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
        }
        self.next += self.period;
        if self.next < Instant::now() {
            // Fell behind by more than a frame; skip, don't burst.
            self.next = Instant::now() + self.period;
        }
        true
    }
}

/// Drives `CursorController::tick` once per clock frame on a worker
/// thread, until `stop()` or the clock runs dry.
///
/// Teardown order: hosts unsubscribe their input sources first, then
/// call `stop()`, so nothing mutates state once teardown begins.
pub struct FrameScheduler {
    is_running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FrameScheduler {
    pub fn start<T, C>(controller: Arc<Mutex<CursorController<T>>>, mut clock: C) -> Self
    where
        T: 'static,
        C: FrameClock + 'static,
        CursorController<T>: Send,
    {
        let is_running = Arc::new(AtomicBool::new(true));
        let running = is_running.clone();

        let handle = std::thread::spawn(move || {
            log::info!("frame loop started");
            while running.load(Ordering::SeqCst) {
                if !clock.wait_next_frame() {
                    break;
                }
                // Re-check after the wait so no tick begins once stop()
                // has cleared the flag.
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                let Ok(mut controller) = controller.lock() else {
                    break;
                };
                controller.tick();
            }
            log::info!("frame loop stopped");
        });

        Self {
            is_running,
            handle: Some(handle),
        }
    }

    /// Cancel the loop and wait for the worker to finish. Idempotent:
    /// safe to call any number of times. After the first call returns, no
    /// further tick runs.
    pub fn stop(&mut self) {
        self.is_running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::SeqCst)
            && self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
