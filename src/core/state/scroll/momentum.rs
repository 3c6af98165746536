//! Drag velocity tracking and the inertial decay loop.

use crate::domain::motion::{MOMENTUM_DECAY, MOMENTUM_FRAME_MS, MOMENTUM_MIN_VELOCITY};

/// Last drag sample: row position and milliseconds since app start.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSample {
    row: f32,
    at_ms: u64,
}

/// Reproduces inertial scrolling from discrete drag samples.
///
/// While dragging, each pair of samples refines a velocity estimate
/// (rows/ms, positive when dragging toward the bottom). After release the
/// decay loop consumes the estimate one frame at a time until it falls under
/// the stop threshold.
#[derive(Debug, Clone, Default)]
pub struct MomentumTracker {
    sample: Option<DragSample>,
    velocity: f32,
    decaying: bool,
}

impl MomentumTracker {
    /// Begin a drag: zero the estimate and remember the first sample.
    pub fn begin(&mut self, row: f32, at_ms: u64) {
        self.sample = Some(DragSample { row, at_ms });
        self.velocity = 0.0;
        self.decaying = false;
    }

    /// Record a drag sample and return the row delta since the previous one.
    pub fn track(&mut self, row: f32, at_ms: u64) -> f32 {
        let Some(prev) = self.sample else {
            self.begin(row, at_ms);
            return 0.0;
        };
        let dt = at_ms.saturating_sub(prev.at_ms).max(1) as f32;
        self.velocity = (row - prev.row) / dt;
        self.sample = Some(DragSample { row, at_ms });
        row - prev.row
    }

    /// End the drag. Starts decaying when the estimate clears the threshold
    /// and returns whether it did.
    pub fn release(&mut self) -> bool {
        self.sample = None;
        self.decaying = self.velocity.abs() >= MOMENTUM_MIN_VELOCITY;
        self.decaying
    }

    pub fn is_decaying(&self) -> bool {
        self.decaying
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// One decay frame: returns the scroll delta to apply, or `None` once
    /// stopped. The magnitude sequence is strictly decreasing, so the loop
    /// terminates for any initial velocity.
    pub fn decay_tick(&mut self) -> Option<f32> {
        if !self.decaying {
            return None;
        }
        let delta = -self.velocity * MOMENTUM_FRAME_MS;
        self.velocity *= MOMENTUM_DECAY;
        if self.velocity.abs() < MOMENTUM_MIN_VELOCITY {
            self.decaying = false;
        }
        Some(delta)
    }

    /// Teardown: forget the drag and kill any pending decay.
    pub fn stop(&mut self) {
        self.sample = None;
        self.velocity = 0.0;
        self.decaying = false;
    }
}
