use std::convert::TryFrom;

use rand::RngCore;

use super::{Memory, Stack};
use crate::{
    definitions::cpu,
    devices::{DisplayCommands, KeyboardCommands, SoundCommands},
    opcode::{ChipOpcodes, Instruction, Opcode, Operation, ProgramCounter, ProgramCounterStep},
    resources::Rom,
    timer::Timers,
    ExecutionError, ProcessError,
};

/// The state the cpu is in between two instructions.
#[derive(Debug, Clone, PartialEq)]
pub enum CpuState {
    /// Fetching and executing instructions.
    Running,
    /// An `FX0A` is waiting for a key press to be stored in the register.
    AwaitingKey { register: usize },
    /// A fatal fault happened, no further instruction will be executed.
    Halted(ExecutionError),
}

/// The ChipSet struct represents the current state
/// of the system, it contains all the structures
/// needed for emulating an instant on the
/// Chip8 CPU.
pub struct ChipSet<D, K, S>
where
    D: DisplayCommands,
    K: KeyboardCommands,
    S: SoundCommands,
{
    /// name of the loaded rom
    pub(super) name: String,
    /// all two bytes long and stored big-endian
    pub(super) opcode: Opcode,
    pub(super) memory: Memory,
    /// `8-bit` data registers named `V0` to `VF`. The `VF` register doubles as a flag for some
    /// instructions; thus, it should be avoided. In an addition operation, `VF` is the carry flag,
    /// while in subtraction, it is the "no borrow" flag. In the draw instruction `VF` is set upon
    /// pixel collision.
    pub(super) registers: [u8; cpu::register::SIZE],
    /// The index for the register, this is a special register entry
    /// called index `I`
    pub(super) index_register: u16,
    /// The program counter is a CPU register in the computer processor which has the address of the
    /// next instruction to be executed from memory.
    pub(super) program_counter: usize,
    pub(super) stack: Stack,
    /// Delay and sound timer, both count down at 60 hertz, until they reach 0.
    pub(super) timers: Timers,
    pub(super) state: CpuState,
    pub(super) display: D,
    pub(super) keyboard: K,
    pub(super) sound: S,
    /// This stores the random number generator, used by the chipset.
    /// It is stored into the chipset, so as to enable simple mocking
    /// of the given type.
    pub(super) rng: Box<dyn RngCore + Send>,
}

impl<D, K, S> ChipSet<D, K, S>
where
    D: DisplayCommands,
    K: KeyboardCommands,
    S: SoundCommands,
{
    /// will create a new chipset object
    pub fn new(rom: Rom, display: D, keyboard: K, sound: S) -> Self {
        Self {
            name: rom.get_name().to_string(),
            opcode: 0,
            memory: Memory::new(&rom),
            registers: [0; cpu::register::SIZE],
            index_register: 0,
            program_counter: cpu::PROGRAM_COUNTER,
            stack: Stack::new(),
            timers: Timers::new(),
            state: CpuState::Running,
            display,
            keyboard,
            sound,
            rng: Box::new(rand::rngs::OsRng),
        }
    }

    /// Replaces the random number generator used by `CXNN`.
    pub fn with_rng<R: RngCore + Send + 'static>(mut self, rng: R) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// will get the next opcode from memory
    pub(super) fn set_opcode(&mut self) -> Result<(), ProcessError> {
        // will build the opcode given from the pointer
        match self.memory.opcode(self.program_counter) {
            Ok(opcode) => {
                self.opcode = opcode;
                Ok(())
            }
            Err(err) => {
                self.opcode = 0;
                Err(err.into())
            }
        }
    }

    /// fetch, decode and execute
    fn cycle(&mut self) -> Result<Operation, ProcessError> {
        self.set_opcode()?;
        let instruction = Instruction::try_from(self.opcode)?;
        log::trace!(
            "{:#06X}: {:#06X} {:?}",
            self.program_counter,
            self.opcode,
            instruction
        );
        self.calc(&instruction)
    }

    /// will advance the program by a single step
    ///
    /// While an `FX0A` is pending this only polls the keyboard. After a fault
    /// every call returns that fault again.
    pub fn next(&mut self) -> Result<Operation, ExecutionError> {
        match self.state {
            CpuState::Running => {}
            CpuState::AwaitingKey { register } => return Ok(self.poll_key(register)),
            CpuState::Halted(ref err) => return Err(err.clone()),
        }

        let pointer = self.program_counter;
        self.cycle().map_err(|source| {
            let err = ExecutionError {
                opcode: self.opcode,
                pointer,
                source,
            };
            log::error!("{}", err);
            self.state = CpuState::Halted(err.clone());
            err
        })
    }

    fn poll_key(&mut self, register: usize) -> Operation {
        match self.keyboard.next_key_press() {
            Some(key) => {
                log::debug!("key {:#X} pressed, resuming", key);
                self.registers[register] = key & 0xF;
                self.state = CpuState::Running;
                // move the counter past the FX0A
                self.step(ProgramCounterStep::Next);
                Operation::None
            }
            None => Operation::Wait,
        }
    }

    /// A single 60 hertz tick of the delay and sound timer.
    pub fn tick_timers(&mut self) {
        let sounding = self.timers.sound.is_active();
        self.timers.tick();
        if sounding && !self.timers.sound.is_active() {
            self.sound.set_active(false);
        }
    }

    pub(super) fn set_sound_timer(&mut self, value: u8) {
        let sounding = self.timers.sound.is_active();
        self.timers.sound.set_value(value);
        if sounding != self.timers.sound.is_active() {
            self.sound.set_active(!sounding);
        }
    }

    /// will return the name of the loaded rom
    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_state(&self) -> &CpuState {
        &self.state
    }

    pub fn is_halted(&self) -> bool {
        matches!(self.state, CpuState::Halted(_))
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self.state, CpuState::AwaitingKey { .. })
    }

    pub fn get_registers(&self) -> &[u8] {
        &self.registers
    }

    pub fn get_index_register(&self) -> u16 {
        self.index_register
    }

    pub fn get_program_counter(&self) -> usize {
        self.program_counter
    }

    /// will return the active return addresses, the length is the stack pointer
    pub fn get_stack(&self) -> &[u16] {
        self.stack.as_slice()
    }

    pub fn get_memory(&self) -> &[u8] {
        self.memory.as_slice()
    }

    /// will return the sound timer
    pub fn get_sound_timer(&self) -> u8 {
        self.timers.sound.get_value()
    }

    /// will return the delay timer
    pub fn get_delay_timer(&self) -> u8 {
        self.timers.delay.get_value()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut K {
        &mut self.keyboard
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }
}

impl<D, K, S> ProgramCounter for ChipSet<D, K, S>
where
    D: DisplayCommands,
    K: KeyboardCommands,
    S: SoundCommands,
{
    fn step(&mut self, step: ProgramCounterStep) {
        self.program_counter = if let ProgramCounterStep::Jump(_) = step {
            step.step()
        } else {
            self.program_counter + step.step()
        }
    }
}
