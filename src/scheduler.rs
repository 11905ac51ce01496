use std::convert::TryFrom;
use std::time::Duration;

use crate::chip8::Chip8;
use crate::constants::{DEFAULT_INSTRUCTIONS_PER_TICK, TIMER_HZ};
use crate::error::Fault;

/// How fast to run the machine.
///
/// Instruction throughput is expressed relative to the timer cadence so the two can be tuned
/// independently: changing `instructions_per_tick` speeds programs up without making their
/// timers run faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    pub instructions_per_tick: u32,
    pub tick_rate_hz: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            instructions_per_tick: DEFAULT_INSTRUCTIONS_PER_TICK,
            tick_rate_hz: TIMER_HZ,
        }
    }
}

/// Turns elapsed wall-clock time into timer ticks and instruction steps.
pub struct Scheduler {
    config: ClockConfig,
    interval: Duration,
    pending: Duration,
}

impl Scheduler {
    pub fn new(config: ClockConfig) -> Self {
        Scheduler {
            config,
            interval: (Duration::from_secs(1) / config.tick_rate_hz.max(1))
                .max(Duration::from_nanos(1)),
            pending: Duration::ZERO,
        }
    }

    /// Time between two timer ticks
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Adds `elapsed` to the time carried over and returns how many whole ticks are now due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.pending += elapsed;
        let ticks = self.pending.as_nanos() / self.interval.as_nanos();
        let ticks = u32::try_from(ticks).unwrap_or(u32::MAX);
        self.pending -= self.interval * ticks;
        ticks
    }

    /// How long the driver can sleep before the next tick is due
    pub fn until_next_tick(&self) -> Duration {
        self.interval.saturating_sub(self.pending)
    }

    /// Runs every tick due after `elapsed`: `instructions_per_tick` steps, then one timer tick.
    ///
    /// Stops at the first fault. Returns the number of ticks run.
    pub fn run(&mut self, chip8: &mut Chip8, elapsed: Duration) -> Result<u32, Fault> {
        let ticks = self.advance(elapsed);
        for _ in 0..ticks {
            for _ in 0..self.config.instructions_per_tick {
                chip8.step()?;
            }
            chip8.tick();
        }
        Ok(ticks)
    }
}
