//! Countdown clock for a run.
//!
//! The clock itself is passive: the engine schedules one tick per
//! [`TICK_INTERVAL`] and feeds it through the state machine.

use std::time::Duration;

/// Interval between two clock ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

const BASE_SECONDS: u32 = 30;
const SECONDS_PER_GRID_STEP: u32 = 8;

/// Seconds allowed for a `grid_size` board: 30s for 2×2 plus 8s per step.
pub fn time_limit(grid_size: u8) -> u32 {
    BASE_SECONDS + u32::from(grid_size.saturating_sub(2)) * SECONDS_PER_GRID_STEP
}

/// Outcome of a single [`GameClock::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    /// The clock is stopped; nothing changed.
    Idle,
    /// One second elapsed and time remains.
    Running { time_left: u32 },
    /// The last second elapsed. Reported once per start.
    Expired,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameClock {
    time_left: u32,
    running: bool,
    expired: bool,
}

impl GameClock {
    pub fn start(&mut self, seconds: u32) {
        self.time_left = seconds;
        self.running = seconds > 0;
        self.expired = seconds == 0;
    }

    pub fn tick(&mut self) -> ClockTick {
        if !self.running || self.time_left == 0 {
            return ClockTick::Idle;
        }
        self.time_left -= 1;
        if self.time_left == 0 {
            self.running = false;
            self.expired = true;
            return ClockTick::Expired;
        }
        ClockTick::Running {
            time_left: self.time_left,
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}
