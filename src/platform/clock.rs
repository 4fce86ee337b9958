//! Fixed-rate frame clock
//!
//! Deadline based: a frame is due once `now` reaches the next deadline. If the
//! loop stalls for longer than one interval the deadline is moved to `now`
//! instead of queueing catch-up frames.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    next_deadline: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next_deadline: start,
            frames: 0,
        }
    }

    /// When the next frame is due
    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Frames handed out so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns true (and schedules the following frame) if a frame is due
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_deadline {
            return false;
        }
        self.frames += 1;
        self.next_deadline += self.interval;
        if self.next_deadline + self.interval <= now {
            log::debug!("Frame clock fell behind, resynchronising");
            self.next_deadline = now + self.interval;
        }
        true
    }
}
