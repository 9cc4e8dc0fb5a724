use std::{
    thread,
    time::{Duration, Instant},
};

/// Paces the game loop
pub trait Ticker {
    /// Block until the next of `rate` evenly spaced ticks per second
    fn wait(&mut self, rate: u32);
}

fn frame_duration(rate: u32) -> Duration {
    Duration::from_nanos((1_000_000_000.0 / rate as f64) as u64)
}

/// Sleeps away whatever is left of the current frame. A tick that
/// arrives late starts a new frame instead of trying to catch up.
#[derive(Default)]
pub struct SleepTicker {
    last_tick: Option<Instant>,
}

impl SleepTicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ticker for SleepTicker {
    fn wait(&mut self, rate: u32) {
        if let Some(last_tick) = self.last_tick {
            let remaining = frame_duration(rate).saturating_sub(last_tick.elapsed());
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}
