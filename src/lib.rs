//! comet-trail: a frame-synchronized easing engine for a decorative
//! comet-tail mouse cursor (dot + lagging ring + tapered trail).
//!
//! The engine is host-agnostic: pointer events come in through
//! [`engine::controller::CursorController`], frames are driven by an
//! [`engine::scheduler::FrameClock`], and positions leave through a
//! [`render::OutputSink`]. A reference raster sink and an offline trace
//! replayer are included.

pub mod config;
pub mod engine;
pub mod render;
pub mod trace;
