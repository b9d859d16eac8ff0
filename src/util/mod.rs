//! Shared utilities for driving the camera from a render loop.

/// Frame delta-time measurement.
pub mod frame_clock;

pub use frame_clock::FrameClock;
