//! The 60 hertz countdown timers and the clock that schedules them next to
//! the instruction loop.
use std::time::Duration;

use crate::definitions::timer;

/// Represents a timer inside of the chip
/// infrastruture, it will count down to
/// zero from what ever number given.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    value: u8,
}

impl Timer {
    /// Will create a new timer with the given value.
    pub fn new(value: u8) -> Self {
        Self { value }
    }

    /// Will set the value from which the timer shall count down from.
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    /// Will get the value that the counter is currently at.
    pub fn get_value(&self) -> u8 {
        self.value
    }

    pub fn is_active(&self) -> bool {
        self.value > 0
    }

    /// Counts down by one, a timer at zero stays at zero.
    pub fn tick(&mut self) {
        self.value = self.value.saturating_sub(1);
    }
}

/// The delay and the sound timer, both only ever decremented together.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timers {
    /// Delay timer: This timer is intended to be used for timing the events of games. Its value
    /// can be set and read.
    pub delay: Timer,
    /// Sound timer: This timer is used for sound effects. When its value is nonzero, a beeping
    /// sound is made.
    pub sound: Timer,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single 60 hertz tick for both timers.
    pub fn tick(&mut self) {
        self.delay.tick();
        self.sound.tick();
    }
}

/// The fastest supported cpu clock.
pub const MAX_HERTZ: u64 = 1_000_000;

/// The work owed after some wall clock time has passed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// instructions to execute
    pub cycles: u64,
    /// timer ticks to fire
    pub ticks: u64,
}

/// A wall clock accumulator, that turns elapsed time into the amount of
/// instructions and timer ticks due. This keeps the timers at 60 hertz no
/// matter how fast the cpu is clocked.
#[derive(Debug, Clone)]
pub struct Clock {
    cpu_interval: Duration,
    timer_interval: Duration,
    cpu_elapsed: Duration,
    timer_elapsed: Duration,
}

impl Clock {
    /// Creates a clock for a cpu running at `hertz` instructions per second.
    pub fn new(hertz: u64) -> Self {
        let hertz = hertz.clamp(1, MAX_HERTZ);
        Self {
            cpu_interval: Duration::from_nanos(1_000_000_000 / hertz),
            timer_interval: Duration::from_nanos(timer::INTERVAL_NANOS),
            cpu_elapsed: Duration::ZERO,
            timer_elapsed: Duration::ZERO,
        }
    }

    pub fn cpu_interval(&self) -> Duration {
        self.cpu_interval
    }

    pub fn timer_interval(&self) -> Duration {
        self.timer_interval
    }

    /// Adds the elapsed time and takes out every full cycle and tick.
    pub fn advance(&mut self, elapsed: Duration) -> Schedule {
        let elapsed = elapsed.min(Duration::from_millis(timer::MAX_CATCH_UP));

        self.cpu_elapsed += elapsed;
        self.timer_elapsed += elapsed;

        let cycles = Self::drain(&mut self.cpu_elapsed, self.cpu_interval);
        let ticks = Self::drain(&mut self.timer_elapsed, self.timer_interval);

        Schedule { cycles, ticks }
    }

    fn drain(acc: &mut Duration, interval: Duration) -> u64 {
        let count = (acc.as_nanos() / interval.as_nanos()) as u64;
        // count is bound by MAX_CATCH_UP plus one interval of remainder
        *acc -= interval * count as u32;
        count
    }
}
