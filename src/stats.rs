use std::time::Duration;

/// Rolling frame-rate counter; reports once per window.
#[derive(Debug)]
pub struct FrameStats {
    window_sec: f32,
    elapsed_sec: f32,
    frames: u32,
    worst_dt_sec: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub fps: f32,
    pub worst_frame_ms: f32,
}

impl FrameStats {
    pub fn new(window_sec: f32) -> Self {
        Self {
            window_sec,
            elapsed_sec: 0.0,
            frames: 0,
            worst_dt_sec: 0.0,
        }
    }

    /// Count one frame; returns a report when the window has filled up.
    pub fn record(&mut self, dt: Duration) -> Option<FrameReport> {
        let dt_sec = dt.as_secs_f32();
        self.elapsed_sec += dt_sec;
        self.frames += 1;
        self.worst_dt_sec = self.worst_dt_sec.max(dt_sec);
        if self.elapsed_sec < self.window_sec {
            return None;
        }
        let report = FrameReport {
            fps: self.frames as f32 / self.elapsed_sec,
            worst_frame_ms: self.worst_dt_sec * 1000.0,
        };
        self.elapsed_sec = 0.0;
        self.frames = 0;
        self.worst_dt_sec = 0.0;
        Some(report)
    }
}
