//! Frame pacing

use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_DT;

/// Clamp a measured frame time into what a single tick may consume
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// Fixed-rate frame clock
pub struct FrameClock {
    frame: Duration,
    last: Instant,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(fps: f32) -> Self {
        let now = Instant::now();
        Self {
            frame: Duration::from_secs_f32(1.0 / fps.max(1.0)),
            last: now,
            frame_start: now,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Begin a frame; returns the seconds elapsed since the previous one
    pub fn start_frame(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        self.frame_start = now;
        clamp_dt(dt)
    }

    /// Sleep away whatever is left of the current frame
    pub fn finish_frame(&self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
    }
}
