//! Offline demo: replay a pointer trace through the easing chain and
//! write the resulting cursor frames as numbered PNGs plus a meta.json.
//!
//! Usage: `comet-trail [trace.jsonl]`. Without an argument a demo trace
//! is synthesized.

use anyhow::Result;
use comet_trail::config::{AppSettings, RenderMeta};
use comet_trail::engine::controller::CursorController;
use comet_trail::render::frame::FrameRenderer;
use comet_trail::trace::{self, TraceEvent};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

fn main() -> Result<()> {
    env_logger::init();

    let settings = AppSettings::load(Path::new("comet-trail.json"))?;
    let fps = settings.animation.refresh_hz;

    let events = match std::env::args().nth(1) {
        Some(path) => {
            let events = trace::read_trace(Path::new(&path))?;
            log::info!("loaded {} events from {}", events.len(), path);
            events
        }
        None => {
            log::info!("no trace given, synthesizing a demo sweep");
            trace::synthesize(settings.output.width, settings.output.height, 5000, fps)
        }
    };

    let session_id = uuid::Uuid::new_v4().to_string();
    let session_dir = PathBuf::from(&settings.output.save_directory)
        .join("renders")
        .join(&session_id);
    let frames_dir = session_dir.join("frames");
    std::fs::create_dir_all(&frames_dir)?;
    log::info!("rendering into {}", session_dir.display());

    let start_time = chrono::Local::now().to_rfc3339();
    let frame_count = replay(&settings, &events, &frames_dir)?;

    let duration_ms = events.last().map(|e| e.timestamp_ms()).unwrap_or(0);
    let meta = RenderMeta {
        version: 1,
        id: session_id,
        width: settings.output.width,
        height: settings.output.height,
        fps,
        start_time,
        duration_ms,
        frame_count,
        trail_count: settings.animation.trail_count,
    };
    let meta_json = serde_json::to_string_pretty(&meta)?;
    std::fs::write(session_dir.join("meta.json"), meta_json)?;

    log::info!("done: {} frames", frame_count);
    Ok(())
}

/// Step through the trace at the configured frame rate: apply every
/// event due by the frame's timestamp, advance the chain once, rasterize.
fn replay(settings: &AppSettings, events: &[TraceEvent], frames_dir: &Path) -> Result<u32> {
    // Trace moves carry the host's interactive classification, so the
    // injected predicate is identity over a bool.
    let mut controller: CursorController<bool> = CursorController::new(
        &settings.animation,
        Box::new(|interactive: &bool| *interactive),
    );

    let renderer = Arc::new(Mutex::new(FrameRenderer::new(
        &settings.output,
        &settings.style,
        settings.animation.trail_count,
    )));
    controller.attach_sink(Box::new(renderer.clone()));

    let frame_ms = (1000 / settings.animation.refresh_hz.max(1) as u64).max(1);
    let duration_ms = events.last().map(|e| e.timestamp_ms()).unwrap_or(0);

    let mut next_event = 0;
    let mut frame_index: u32 = 0;
    let mut now = 0;
    while now <= duration_ms {
        while next_event < events.len() && events[next_event].timestamp_ms() <= now {
            match &events[next_event] {
                TraceEvent::Move {
                    x, y, interactive, ..
                } => controller.pointer_moved(*x, *y, interactive),
                TraceEvent::Enter { x, y, .. } => controller.surface_entered(*x, *y),
                TraceEvent::Leave { .. } => controller.surface_left(),
            }
            next_event += 1;
        }

        controller.tick();

        let img = renderer.lock().unwrap().render();
        let frame_path = frames_dir.join(format!("frame_{:05}.png", frame_index));
        img.save(&frame_path)?;

        frame_index += 1;
        if frame_index % 60 == 0 {
            log::info!("rendered {} frames", frame_index);
        }
        now += frame_ms;
    }

    Ok(frame_index)
}
