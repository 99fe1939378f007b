//! Pointer traces: JSONL files of timestamped pointer events, one JSON
//! object per line. Captured by a host at input time (with the
//! interactive classification already applied) and replayed offline.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum TraceEvent {
    #[serde(rename = "move")]
    Move {
        t: u64,
        x: f64,
        y: f64,
        #[serde(default)]
        interactive: bool,
    },
    #[serde(rename = "enter")]
    Enter { t: u64, x: f64, y: f64 },
    #[serde(rename = "leave")]
    Leave { t: u64 },
}

impl TraceEvent {
    pub fn timestamp_ms(&self) -> u64 {
        match self {
            TraceEvent::Move { t, .. } | TraceEvent::Enter { t, .. } | TraceEvent::Leave { t } => {
                *t
            }
        }
    }
}

pub fn read_trace(path: &Path) -> Result<Vec<TraceEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read trace {}", path.display()))?;

    let mut events = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let event: TraceEvent = serde_json::from_str(line)
            .with_context(|| format!("malformed trace event at line {}", lineno + 1))?;
        events.push(event);
    }
    Ok(events)
}

pub fn write_trace(path: &Path, events: &[TraceEvent]) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("failed to create trace {}", path.display()))?;
    for event in events {
        let json = serde_json::to_string(event)?;
        writeln!(file, "{}", json)?;
    }
    Ok(())
}

/// Generate a demo trace: a Lissajous sweep across the surface with a
/// hover stretch in the middle and one leave/enter gap near the end.
pub fn synthesize(width: u32, height: u32, duration_ms: u64, fps: u32) -> Vec<TraceEvent> {
    let frame_ms = (1000 / fps.max(1) as u64).max(1);
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;

    let gap_start = duration_ms * 6 / 10;
    let gap_end = duration_ms * 7 / 10;
    let hover_start = duration_ms * 3 / 10;
    let hover_end = duration_ms * 5 / 10;

    let mut events = Vec::new();
    let mut t = 0;
    let mut in_gap = false;
    while t <= duration_ms {
        let phase = t as f64 / 1000.0;
        let x = cx + cx * 0.8 * (phase * 1.3).sin();
        let y = cy + cy * 0.8 * (phase * 2.1).cos();

        if t >= gap_start && t < gap_end {
            if !in_gap {
                in_gap = true;
                events.push(TraceEvent::Leave { t });
            }
        } else {
            if in_gap {
                in_gap = false;
                events.push(TraceEvent::Enter { t, x, y });
            }
            events.push(TraceEvent::Move {
                t,
                x,
                y,
                interactive: t >= hover_start && t < hover_end,
            });
        }
        t += frame_ms;
    }
    events
}
