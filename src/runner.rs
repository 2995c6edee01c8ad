use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use crate::{
    chip8::ChipSet,
    devices::{DisplayCommands, KeyboardCommands, SoundCommands},
    opcode::Operation,
    timer::Clock,
    ExecutionError,
};

/// A cooperative cancellation flag, every clone observes the same state.
#[derive(Debug, Default, Clone)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the runner to stop before its next cycle or tick.
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Drives the chipset from a single thread. Instructions run at the
/// configured clock, the timers at 60 hertz, both derived from the same
/// wall clock.
pub struct Runner<D, K, S>
where
    D: DisplayCommands,
    K: KeyboardCommands,
    S: SoundCommands,
{
    chip: ChipSet<D, K, S>,
    clock: Clock,
    stop: StopSignal,
}

impl<D, K, S> Runner<D, K, S>
where
    D: DisplayCommands,
    K: KeyboardCommands,
    S: SoundCommands,
{
    pub fn new(chip: ChipSet<D, K, S>, hertz: u64) -> Self {
        Self {
            chip,
            clock: Clock::new(hertz),
            stop: StopSignal::new(),
        }
    }

    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    pub fn chip(&self) -> &ChipSet<D, K, S> {
        &self.chip
    }

    pub fn chip_mut(&mut self) -> &mut ChipSet<D, K, S> {
        &mut self.chip
    }

    pub fn into_chip(self) -> ChipSet<D, K, S> {
        self.chip
    }

    /// Runs the instructions and timer ticks owed for `elapsed` wall time.
    ///
    /// Returns [`Operation::Draw`] if any instruction touched the display,
    /// [`Operation::Wait`] if the cpu is waiting for a key afterwards and
    /// [`Operation::None`] otherwise.
    pub fn advance(&mut self, elapsed: Duration) -> Result<Operation, ExecutionError> {
        let schedule = self.clock.advance(elapsed);
        let mut drawn = false;

        for _ in 0..schedule.cycles {
            if self.stop.is_stopped() {
                break;
            }
            match self.chip.next()? {
                Operation::Draw => drawn = true,
                // nothing to do until a key arrives
                Operation::Wait => break,
                Operation::None => {}
            }
        }

        for _ in 0..schedule.ticks {
            if self.stop.is_stopped() {
                break;
            }
            self.chip.tick_timers();
        }

        let op = if drawn {
            Operation::Draw
        } else if self.chip.is_waiting() {
            Operation::Wait
        } else {
            Operation::None
        };
        Ok(op)
    }

    /// Runs until the stop signal is raised or a fault halts the cpu. The
    /// `frame` callback gets the chipset after every step, together with
    /// the result of that step.
    pub fn run<F>(&mut self, mut frame: F) -> Result<(), ExecutionError>
    where
        F: FnMut(&mut ChipSet<D, K, S>, Operation),
    {
        log::info!(
            "running '{}' every {:?}",
            self.chip.get_name(),
            self.clock.cpu_interval()
        );
        let step = self.clock.timer_interval();
        let mut last = Instant::now();

        while !self.stop.is_stopped() {
            let now = Instant::now();
            let op = self.advance(now - last)?;
            last = now;

            frame(&mut self.chip, op);

            thread::sleep(step.saturating_sub(now.elapsed()));
        }

        log::info!("stopped '{}'", self.chip.get_name());
        Ok(())
    }
}
