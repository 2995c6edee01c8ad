//! Opcode abstractions, functionality and constants.
use std::convert::TryFrom;

use crate::{definitions::memory, OpcodeError, ProcessError};

/// the base mask used for generating all the other sub masks
pub(crate) const OPCODE_MASK_FFFF: u16 = u16::MAX;

/// the mask for the first twelve bits
pub(crate) const OPCODE_MASK_FFF0: u16 = OPCODE_MASK_FFFF << 4;

/// the mask for the first eight bits
pub(crate) const OPCODE_MASK_FF00: u16 = OPCODE_MASK_FFFF << 8;

/// the mask for the first four bits
pub(crate) const OPCODE_MASK_F000: u16 = OPCODE_MASK_FFFF << 12;

/// the mask for the last four bits
pub(crate) const OPCODE_MASK_000F: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FFF0;

/// the mask for the last eight bits
pub(crate) const OPCODE_MASK_00FF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FF00;

/// the mask for the last twelve bits
pub(crate) const OPCODE_MASK_0FFF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_F000;

/// the size of a single nibble
const NIBBLE: u16 = 0x4;

/// a wrapper type for u16 to make it clear what is meant to be used
pub type Opcode = u16;

/// will build an opcode from data and the given point
/// # Arguments
///
/// - `data` - A slice of u8 data entries used to generate the opcodes
/// - `pointer` - Where in the data the opcode shall be extracted, so `pointer` and `pointer + 1` make
/// the opcode up
///
/// # Example
/// ```rust
/// # use chip::opcode::*;
/// # use chip::OpcodeError;
///  const OPCODES: [Opcode; 2] = [0x00EE, 0x1EDA];
///  const SPLIT_OPCODE: [u8; 4] = [0x00, 0xEE, 0x1E, 0xDA];
///  for (i, val) in OPCODES.iter().enumerate() {
///      let opcode = build_opcode(&SPLIT_OPCODE, i * 2).expect("This will work.");
///      assert_eq!(opcode, *val);
///  }
/// # let pointer = 3;
/// # let err = OpcodeError::MemoryInvalid { pointer, len: SPLIT_OPCODE.len() };
/// # assert_eq!(Err(err), build_opcode(&SPLIT_OPCODE, pointer));
/// ```
pub fn build_opcode(data: &[u8], pointer: usize) -> Result<Opcode, OpcodeError> {
    // controlling that there is no illegal access here
    if pointer + 1 < data.len() {
        Ok(Opcode::from_be_bytes([data[pointer], data[pointer + 1]]))
    } else {
        Err(OpcodeError::MemoryInvalid {
            pointer,
            len: data.len(),
        })
    }
}

/// Field extraction for instruction words. All of these are pure and
/// defined for every possible `u16`.
pub trait OpcodeTrait {
    /// the opcode family, the highest nibble `T___`
    fn t(&self) -> usize;

    /// the register index `_X__`
    fn x(&self) -> usize;

    /// the register index `__Y_`
    fn y(&self) -> usize;

    /// the lowest nibble `___N`
    fn n(&self) -> usize;

    /// the lowest byte `__NN`
    fn nn(&self) -> u8;

    /// the twelve bit address `_NNN`
    fn nnn(&self) -> usize;

    /// this is an opcode extractor for the opcode type `TXY_`
    fn xy(&self) -> (usize, usize) {
        (self.x(), self.y())
    }

    /// this is an opcode extractor for the opcode type `TXNN`
    fn xnn(&self) -> (usize, u8) {
        (self.x(), self.nn())
    }

    /// this is an opcode extractor for the opcode type `TXYN`
    fn xyn(&self) -> (usize, usize, usize) {
        (self.x(), self.y(), self.n())
    }
}

impl OpcodeTrait for Opcode {
    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.t(), 0x1);
    /// ```
    fn t(&self) -> usize {
        ((self & OPCODE_MASK_F000) >> (3 * NIBBLE)) as usize
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.x(), 0xE);
    /// ```
    fn x(&self) -> usize {
        ((self & OPCODE_MASK_0FFF & OPCODE_MASK_FF00) >> (2 * NIBBLE)) as usize
    }

    fn y(&self) -> usize {
        const MASK: u16 = OPCODE_MASK_00FF ^ OPCODE_MASK_000F;
        ((self & MASK) >> NIBBLE) as usize
    }

    fn n(&self) -> usize {
        (self & OPCODE_MASK_000F) as usize
    }

    fn nn(&self) -> u8 {
        (self & OPCODE_MASK_00FF) as u8
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.nnn(), 0xEDA);
    ///  assert_eq!(BASE_OPCODE.xyn(), (0xE, 0xD, 0xA));
    /// ```
    fn nnn(&self) -> usize {
        (self & OPCODE_MASK_0FFF) as usize
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents the program steps that the chip
/// can take.
pub enum ProgramCounterStep {
    /// Will not change the program counter
    None,
    /// Will move the program counter to the next instruction
    Next,
    /// Will skip the next instruction
    Skip,
    /// Will simply move the program counter to the given location.
    Jump(usize),
}

impl ProgramCounterStep {
    /// Will return a Skip if the condition is true.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next, ProgramCounterStep::cond(false));
    /// assert_eq!(ProgramCounterStep::Skip, ProgramCounterStep::cond(true));
    /// ```
    #[inline]
    pub fn cond(cond: bool) -> Self {
        if cond {
            ProgramCounterStep::Skip
        } else {
            ProgramCounterStep::Next
        }
    }

    /// Maps the [`ProgramCounterStep`](ProgramCounterStep) to the corresponding movement distance,
    /// or for a jump the target itself.
    #[inline]
    pub fn step(&self) -> usize {
        match *self {
            ProgramCounterStep::Next => memory::opcodes::SIZE,
            ProgramCounterStep::Skip => 2 * memory::opcodes::SIZE,
            ProgramCounterStep::None => 0,
            ProgramCounterStep::Jump(pointer) => pointer,
        }
    }
}

/// Generates the lookup from a sub opcode onto its enum variant.
macro_rules! impl_from_code {
    ($type_name:ty : $type_from:ty : $( $key:literal => $val:expr ),+ $(,)? ) => {
        impl $type_name {
            /// Maps the sub opcode onto its variant, if there is one.
            pub fn from_code(value: $type_from) -> Option<Self> {
                match value {
                    $(
                        $key => Some($val),
                    )+
                    _ => None,
                }
            }
        }
    };
}

/// The comparison used by the conditional skip instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Equal,
    NotEqual,
}

impl Condition {
    #[inline]
    pub fn holds<T: PartialEq>(&self, left: T, right: T) -> bool {
        match self {
            Condition::Equal => left == right,
            Condition::NotEqual => left != right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCondition {
    Pressed,
    NotPressed,
}

impl_from_code!(KeyCondition : u8 :
    // EX9E
    0x9E => KeyCondition::Pressed,
    // EXA1
    0xA1 => KeyCondition::NotPressed,
);

/// The register to register operations of the `8XYT` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Assign,
    Or,
    And,
    Xor,
    Add,
    Sub,
    ShiftRight,
    SubReverse,
    ShiftLeft,
}

impl_from_code!(ArithmeticOp : usize :
    // 8XY0
    0x0 => ArithmeticOp::Assign,
    // 8XY1
    0x1 => ArithmeticOp::Or,
    // 8XY2
    0x2 => ArithmeticOp::And,
    // 8XY3
    0x3 => ArithmeticOp::Xor,
    // 8XY4
    0x4 => ArithmeticOp::Add,
    // 8XY5
    0x5 => ArithmeticOp::Sub,
    // 8XY6
    0x6 => ArithmeticOp::ShiftRight,
    // 8XY7
    0x7 => ArithmeticOp::SubReverse,
    // 8XYE
    0xE => ArithmeticOp::ShiftLeft,
);

/// The timer, memory and input operations of the `FXTT` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialOp {
    GetDelayTimer,
    AwaitKeyPress,
    SetDelayTimer,
    SetSoundTimer,
    AddToIndex,
    LoadGlyph,
    StoreBcd,
    StoreRegisters,
    LoadRegisters,
}

impl_from_code!(SpecialOp : u8 :
    0x07 => SpecialOp::GetDelayTimer,
    0x0A => SpecialOp::AwaitKeyPress,
    0x15 => SpecialOp::SetDelayTimer,
    0x18 => SpecialOp::SetSoundTimer,
    0x1E => SpecialOp::AddToIndex,
    0x29 => SpecialOp::LoadGlyph,
    0x33 => SpecialOp::StoreBcd,
    0x55 => SpecialOp::StoreRegisters,
    0x65 => SpecialOp::LoadRegisters,
);

/// A fully decoded and supported instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0`
    Clear,
    /// `00EE`
    Return,
    /// `1NNN`
    Jump { nnn: usize },
    /// `2NNN`
    Call { nnn: usize },
    /// `3XNN` and `4XNN`
    SkipConst { cond: Condition, x: usize, nn: u8 },
    /// `5XY0` and `9XY0`
    SkipRegister { cond: Condition, x: usize, y: usize },
    /// `6XNN`
    Load { x: usize, nn: u8 },
    /// `7XNN`
    Add { x: usize, nn: u8 },
    /// `8XYT`
    Arithmetic { ops: ArithmeticOp, x: usize, y: usize },
    /// `ANNN`
    LoadIndex { nnn: usize },
    /// `BNNN`
    JumpOffset { nnn: usize },
    /// `CXNN`
    Random { x: usize, nn: u8 },
    /// `DXYN`
    Draw { x: usize, y: usize, n: usize },
    /// `EX9E` and `EXA1`
    SkipKey { cond: KeyCondition, x: usize },
    /// `FXTT`
    Special { ops: SpecialOp, x: usize },
}

impl TryFrom<Opcode> for Instruction {
    type Error = OpcodeError;

    fn try_from(value: Opcode) -> Result<Self, Self::Error> {
        let invalid = || OpcodeError::InvalidOpcode(value);

        let instruction = match value.t() {
            0x0 => match value {
                0x00E0 => Instruction::Clear,
                0x00EE => Instruction::Return,
                // 0NNN machine code routines are not supported
                _ => return Err(invalid()),
            },
            0x1 => Instruction::Jump { nnn: value.nnn() },
            0x2 => Instruction::Call { nnn: value.nnn() },
            0x3 | 0x4 => {
                let (x, nn) = value.xnn();
                let cond = if value.t() == 0x3 {
                    Condition::Equal
                } else {
                    Condition::NotEqual
                };
                Instruction::SkipConst { cond, x, nn }
            }
            0x5 | 0x9 => match value.xyn() {
                (x, y, 0) => {
                    let cond = if value.t() == 0x5 {
                        Condition::Equal
                    } else {
                        Condition::NotEqual
                    };
                    Instruction::SkipRegister { cond, x, y }
                }
                _ => return Err(invalid()),
            },
            0x6 => {
                let (x, nn) = value.xnn();
                Instruction::Load { x, nn }
            }
            0x7 => {
                let (x, nn) = value.xnn();
                Instruction::Add { x, nn }
            }
            0x8 => {
                let (x, y, n) = value.xyn();
                let ops = ArithmeticOp::from_code(n).ok_or_else(invalid)?;
                Instruction::Arithmetic { ops, x, y }
            }
            0xA => Instruction::LoadIndex { nnn: value.nnn() },
            0xB => Instruction::JumpOffset { nnn: value.nnn() },
            0xC => {
                let (x, nn) = value.xnn();
                Instruction::Random { x, nn }
            }
            0xD => {
                let (x, y, n) = value.xyn();
                Instruction::Draw { x, y, n }
            }
            0xE => {
                let (x, nn) = value.xnn();
                let cond = KeyCondition::from_code(nn).ok_or_else(invalid)?;
                Instruction::SkipKey { cond, x }
            }
            0xF => {
                let (x, nn) = value.xnn();
                let ops = SpecialOp::from_code(nn).ok_or_else(invalid)?;
                Instruction::Special { ops, x }
            }
            _ => return Err(invalid()),
        };
        Ok(instruction)
    }
}

/// Represents a step of the program counter
/// this requires the enum ProgramCounterStep
/// to work.
pub trait ProgramCounter {
    /// will move the program counter forward by a step.
    fn step(&mut self, step: ProgramCounterStep);
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents a command from the interpreter up to the frontend.
pub enum Operation {
    /// If no action has to be taken.
    None,
    /// The cpu is waiting for the next key press.
    Wait,
    /// The display content changed.
    Draw,
}

/// These are the traits that have to be full filled for a working opcode
/// table.
///
/// This trait requires the implementation of the [`ProgramCounter`](ProgramCounter) trait for the
/// step functionality.
pub trait ChipOpcodes: ProgramCounter {
    /// will execute a single instruction and move the program counter accordingly
    fn calc(&mut self, instruction: &Instruction) -> Result<Operation, ProcessError> {
        let mut operation = Operation::None;
        let step_op = |(step, op): (ProgramCounterStep, Operation)| {
            operation = op;
            step
        };

        let step = match *instruction {
            Instruction::Clear => self.clear().map(step_op),
            Instruction::Return => self.subroutine_return(),
            Instruction::Jump { nnn } => self.jump(nnn),
            Instruction::Call { nnn } => self.call(nnn),
            Instruction::SkipConst { cond, x, nn } => self.skip_const(cond, x, nn),
            Instruction::SkipRegister { cond, x, y } => self.skip_register(cond, x, y),
            Instruction::Load { x, nn } => self.load(x, nn),
            Instruction::Add { x, nn } => self.add(x, nn),
            Instruction::Arithmetic { ops, x, y } => self.arithmetic(ops, x, y),
            Instruction::LoadIndex { nnn } => self.load_index(nnn),
            Instruction::JumpOffset { nnn } => self.jump_offset(nnn),
            Instruction::Random { x, nn } => self.random(x, nn),
            Instruction::Draw { x, y, n } => self.draw(x, y, n).map(step_op),
            Instruction::SkipKey { cond, x } => self.skip_key(cond, x),
            Instruction::Special { ops, x } => self.special(ops, x).map(step_op),
        }?;

        self.step(step);
        Ok(operation)
    }

    /// - `00E0` - Display  - `disp_clear()`        - Clears the screen.
    fn clear(&mut self) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `00EE` - Flow     - `return;`             - Returns from a subroutine.
    ///
    /// Fails with [`StackError::Empty`](crate::StackError::Empty) outside of a subroutine.
    fn subroutine_return(&mut self) -> Result<ProgramCounterStep, ProcessError>;

    /// - `1NNN` - Flow     - `goto NNN;`           - Jumps to address `NNN`.
    fn jump(&self, nnn: usize) -> Result<ProgramCounterStep, ProcessError>;

    /// - `2NNN` - Flow     - `*(0xNNN)()`          - Calls subroutine at `NNN`.
    ///
    /// Fails with [`StackError::Full`](crate::StackError::Full) past the sixteenth nesting level.
    fn call(&mut self, nnn: usize) -> Result<ProgramCounterStep, ProcessError>;

    /// - `3XNN` - Cond     - `if(Vx==NN)`          - Skips the next instruction if `VX` equals `NN`.
    /// - `4XNN` - Cond     - `if(Vx!=NN)`          - Skips the next instruction if `VX` doesn't equal `NN`.
    fn skip_const(&self, cond: Condition, x: usize, nn: u8)
        -> Result<ProgramCounterStep, ProcessError>;

    /// - `5XY0` - Cond     - `if(Vx==Vy)`          - Skips the next instruction if `VX` equals `VY`.
    /// - `9XY0` - Cond     - `if(Vx!=Vy)`          - Skips the next instruction if `VX` doesn't equal `VY`.
    fn skip_register(
        &self,
        cond: Condition,
        x: usize,
        y: usize,
    ) -> Result<ProgramCounterStep, ProcessError>;

    /// - `6XNN` - Const    - `Vx = NN`             - Sets `VX` to `NN`.
    fn load(&mut self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError>;

    /// - `7XNN` - Const    - `Vx += NN`            - Adds `NN` to `VX`. (Carry flag is not changed)
    fn add(&mut self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError>;

    /// A mutiuse opcode base for type `8XYT` (T is a sub opcode)
    ///
    /// - `8XY0` - Assign   - `Vx=Vy`               - Sets `VX` to the value of `VY`.
    /// - `8XY1` - BitOp    - `Vx=Vx|Vy`            - Sets `VX` to `VX` or `VY`.
    /// - `8XY2` - BitOp    - `Vx=Vx&Vy`            - Sets `VX` to `VX` and `VY`.
    /// - `8XY3` - BitOp    - `Vx=Vx^Vy`            - Sets `VX` to `VX` xor `VY`.
    /// - `8XY4` - Math     - `Vx += Vy`            - Adds `VY` to `VX`. `VF` is set to `1` when there's a carry, and to `0` when there isn't.
    /// - `8XY5` - Math     - `Vx -= Vy`            - `VY` is subtracted from `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XY6` - BitOp    - `Vx>>=1`              - Stores the least significant bit of `VX` in `VF` and then shifts `VX` to the right by `1`.
    /// - `8XY7` - Math     - `Vx=Vy-Vx`            - Sets `VX` to `VY` minus `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XYE` - BitOp    - `Vx<<=1`              - Stores the most significant bit of `VX` in `VF` and then shifts `VX` to the left by `1`.
    fn arithmetic(
        &mut self,
        ops: ArithmeticOp,
        x: usize,
        y: usize,
    ) -> Result<ProgramCounterStep, ProcessError>;

    /// - `ANNN` - MEM      - `I = NNN`             - Sets `I` to the address `NNN`.
    fn load_index(&mut self, nnn: usize) -> Result<ProgramCounterStep, ProcessError>;

    /// - `BNNN` - Flow     - `PC=V0+NNN`           - Jumps to the address `NNN` plus `V0`.
    fn jump_offset(&self, nnn: usize) -> Result<ProgramCounterStep, ProcessError>;

    /// - `CXNN` - Rand     - `Vx=rand()&NN`        - Sets `VX` to a random byte masked with `NN`.
    fn random(&mut self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError>;

    /// - `DXYN` - Disp     - `draw(Vx,Vy,N)`       - Draws an `N` rows high sprite read from `I`
    ///   at `(VX, VY)`. `VF` is set to `1` if any pixel got flipped from set to unset.
    fn draw(
        &mut self,
        x: usize,
        y: usize,
        n: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `EX9E` - KeyOp    - `if(key()==Vx)`       - Skips the next instruction if the key stored in `VX` is pressed.
    /// - `EXA1` - KeyOp    - `if(key()!=Vx)`       - Skips the next instruction if the key stored in `VX` isn't pressed.
    fn skip_key(&self, cond: KeyCondition, x: usize) -> Result<ProgramCounterStep, ProcessError>;

    /// A multiuse opcode base for type `FXTT` (T is a sub opcode)
    ///
    /// - `FX07` - Timer    - `Vx = get_delay()`    - Sets `VX` to the value of the delay timer.
    /// - `FX0A` - KeyOp    - `Vx = get_key()`      - A key press is awaited, and then stored in `VX`.
    /// - `FX15` - Timer    - `delay_timer(Vx)`     - Sets the delay timer to `VX`.
    /// - `FX18` - Sound    - `sound_timer(Vx)`     - Sets the sound timer to `VX`.
    /// - `FX1E` - MEM      - `I +=Vx`              - Adds `VX` to `I`. `VF` flags a result past `0xFFF`.
    /// - `FX29` - MEM      - `I=sprite_addr[Vx]`   - Sets `I` to the glyph of the hex digit in `VX`.
    /// - `FX33` - BCD      - `set_BCD(Vx)`         - Stores the decimal digits of `VX` at `I`, `I+1` and `I+2`.
    /// - `FX55` - MEM      - `reg_dump(Vx,&I)`     - Stores `V0` to `VX` (including `VX`) in memory starting at `I`.
    /// - `FX65` - MEM      - `reg_load(Vx,&I)`     - Fills `V0` to `VX` (including `VX`) from memory starting at `I`.
    fn special(
        &mut self,
        ops: SpecialOp,
        x: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError>;
}

#[cfg(test)]
mod tests {
    use std::convert::TryInto;

    use super::*;

    #[test]
    fn test_field_extraction() {
        let opcode: Opcode = 0xD4A7;
        assert_eq!(opcode.t(), 0xD);
        assert_eq!(opcode.x(), 0x4);
        assert_eq!(opcode.y(), 0xA);
        assert_eq!(opcode.n(), 0x7);
        assert_eq!(opcode.nn(), 0xA7);
        assert_eq!(opcode.nnn(), 0x4A7);
        assert_eq!(opcode.xy(), (0x4, 0xA));
        assert_eq!(opcode.xnn(), (0x4, 0xA7));
    }

    #[test]
    fn test_every_word_is_decodable() {
        for value in 0..=u16::MAX {
            assert_eq!(value.t(), (value >> 12) as usize);
            assert!(value.x() < 16 && value.y() < 16 && value.n() < 16);
            assert!(value.nnn() <= 0xFFF);
        }
    }

    #[test]
    fn test_tryfrom_opcode_simple() {
        let value: Opcode = 0x00E0;
        let conv = value.try_into();
        assert_eq!(conv, Ok(Instruction::Clear));
    }

    #[test]
    fn test_tryfrom_opcode_simple_fail() {
        let value: Opcode = 0x00E1;
        let conv: Result<Instruction, _> = value.try_into();
        assert_eq!(conv, Err(OpcodeError::InvalidOpcode(value)));
    }

    #[test]
    fn test_tryfrom_opcode_multiple() {
        let tests = [
            (0x00E0, Ok(Instruction::Clear)),
            (0x00EE, Ok(Instruction::Return)),
            (0x0123, Err(())),
            (0x1919, Ok(Instruction::Jump { nnn: 0x919 })),
            (0x2222, Ok(Instruction::Call { nnn: 0x222 })),
            (
                0x3123,
                Ok(Instruction::SkipConst {
                    cond: Condition::Equal,
                    x: 0x1,
                    nn: 0x23,
                }),
            ),
            (
                0x4123,
                Ok(Instruction::SkipConst {
                    cond: Condition::NotEqual,
                    x: 0x1,
                    nn: 0x23,
                }),
            ),
            (
                0x5120,
                Ok(Instruction::SkipRegister {
                    cond: Condition::Equal,
                    x: 0x1,
                    y: 0x2,
                }),
            ),
            (0x5121, Err(())),
            (0x6123, Ok(Instruction::Load { x: 0x1, nn: 0x23 })),
            (0x7123, Ok(Instruction::Add { x: 0x1, nn: 0x23 })),
            (
                0x8124,
                Ok(Instruction::Arithmetic {
                    ops: ArithmeticOp::Add,
                    x: 0x1,
                    y: 0x2,
                }),
            ),
            (
                0x812E,
                Ok(Instruction::Arithmetic {
                    ops: ArithmeticOp::ShiftLeft,
                    x: 0x1,
                    y: 0x2,
                }),
            ),
            (0x8128, Err(())),
            (
                0x9120,
                Ok(Instruction::SkipRegister {
                    cond: Condition::NotEqual,
                    x: 0x1,
                    y: 0x2,
                }),
            ),
            (0x9121, Err(())),
            (0xA222, Ok(Instruction::LoadIndex { nnn: 0x222 })),
            (0xB222, Ok(Instruction::JumpOffset { nnn: 0x222 })),
            (0xC123, Ok(Instruction::Random { x: 0x1, nn: 0x23 })),
            (
                0xD123,
                Ok(Instruction::Draw {
                    x: 0x1,
                    y: 0x2,
                    n: 0x3,
                }),
            ),
            (
                0xE19E,
                Ok(Instruction::SkipKey {
                    cond: KeyCondition::Pressed,
                    x: 0x1,
                }),
            ),
            (
                0xE1A1,
                Ok(Instruction::SkipKey {
                    cond: KeyCondition::NotPressed,
                    x: 0x1,
                }),
            ),
            (0xE111, Err(())),
            (
                0xF00A,
                Ok(Instruction::Special {
                    ops: SpecialOp::AwaitKeyPress,
                    x: 0x0,
                }),
            ),
            (
                0xF333,
                Ok(Instruction::Special {
                    ops: SpecialOp::StoreBcd,
                    x: 0x3,
                }),
            ),
            (0xF0AA, Err(())),
        ];
        for (value, res) in tests {
            let value: Opcode = value;
            let conv: Result<Instruction, _> = value.try_into();
            assert_eq!(conv, res.map_err(|_| OpcodeError::InvalidOpcode(value)));
        }
    }

    #[test]
    fn test_all_eight_sub_opcodes() {
        let supported = [0x0, 0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7, 0xE];
        for n in 0..16 {
            assert_eq!(supported.contains(&n), ArithmeticOp::from_code(n).is_some());
        }
    }

    #[test]
    fn test_program_counter_step() {
        assert_eq!(ProgramCounterStep::None.step(), 0);
        assert_eq!(ProgramCounterStep::Next.step(), 2);
        assert_eq!(ProgramCounterStep::Skip.step(), 4);
        assert_eq!(ProgramCounterStep::Jump(0x345).step(), 0x345);
    }
}
