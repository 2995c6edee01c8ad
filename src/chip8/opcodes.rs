use crate::{
    definitions::{cpu, display, memory},
    devices::{DisplayCommands, KeyboardCommands, SoundCommands},
    opcode::{
        ArithmeticOp, ChipOpcodes, Condition, KeyCondition, Operation, ProgramCounterStep,
        SpecialOp,
    },
    ProcessError,
};

use super::{ChipSet, CpuState};

impl<D, K, S> ChipOpcodes for ChipSet<D, K, S>
where
    D: DisplayCommands,
    K: KeyboardCommands,
    S: SoundCommands,
{
    fn clear(&mut self) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        self.display.clear();
        Ok((ProgramCounterStep::Next, Operation::Draw))
    }

    fn subroutine_return(&mut self) -> Result<ProgramCounterStep, ProcessError> {
        let pc = self.stack.pop()?;
        log::debug!("return to {:#06X}", pc);
        Ok(ProgramCounterStep::Jump(pc))
    }

    fn jump(&self, nnn: usize) -> Result<ProgramCounterStep, ProcessError> {
        Ok(ProgramCounterStep::Jump(nnn))
    }

    fn call(&mut self, nnn: usize) -> Result<ProgramCounterStep, ProcessError> {
        // the return address is the opcode after the call
        self.stack
            .push(self.program_counter + ProgramCounterStep::Next.step())?;
        log::debug!("call {:#06X} from {:#06X}", nnn, self.program_counter);
        Ok(ProgramCounterStep::Jump(nnn))
    }

    fn skip_const(
        &self,
        cond: Condition,
        x: usize,
        nn: u8,
    ) -> Result<ProgramCounterStep, ProcessError> {
        Ok(ProgramCounterStep::cond(cond.holds(self.registers[x], nn)))
    }

    fn skip_register(
        &self,
        cond: Condition,
        x: usize,
        y: usize,
    ) -> Result<ProgramCounterStep, ProcessError> {
        Ok(ProgramCounterStep::cond(
            cond.holds(self.registers[x], self.registers[y]),
        ))
    }

    fn load(&mut self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError> {
        self.registers[x] = nn;
        Ok(ProgramCounterStep::Next)
    }

    fn add(&mut self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError> {
        // let VX overflow, but ignore carry
        self.registers[x] = self.registers[x].wrapping_add(nn);
        Ok(ProgramCounterStep::Next)
    }

    fn arithmetic(
        &mut self,
        ops: ArithmeticOp,
        x: usize,
        y: usize,
    ) -> Result<ProgramCounterStep, ProcessError> {
        let vx = self.registers[x];
        let vy = self.registers[y];

        // the flag is written after the result, so it wins if x is VF
        let flag = match ops {
            ArithmeticOp::Assign => {
                self.registers[x] = vy;
                None
            }
            ArithmeticOp::Or => {
                self.registers[x] = vx | vy;
                None
            }
            ArithmeticOp::And => {
                self.registers[x] = vx & vy;
                None
            }
            ArithmeticOp::Xor => {
                self.registers[x] = vx ^ vy;
                None
            }
            ArithmeticOp::Add => {
                let (res, carry) = vx.overflowing_add(vy);
                self.registers[x] = res;
                Some(carry as u8)
            }
            ArithmeticOp::Sub => {
                let (res, borrow) = vx.overflowing_sub(vy);
                self.registers[x] = res;
                Some(!borrow as u8)
            }
            ArithmeticOp::ShiftRight => {
                self.registers[x] = vx >> 1;
                Some(vx & 0x01)
            }
            ArithmeticOp::SubReverse => {
                let (res, borrow) = vy.overflowing_sub(vx);
                self.registers[x] = res;
                Some(!borrow as u8)
            }
            ArithmeticOp::ShiftLeft => {
                self.registers[x] = vx << 1;
                Some(vx >> 7)
            }
        };

        if let Some(flag) = flag {
            self.registers[cpu::register::LAST] = flag;
        }
        Ok(ProgramCounterStep::Next)
    }

    fn load_index(&mut self, nnn: usize) -> Result<ProgramCounterStep, ProcessError> {
        self.index_register = nnn as u16;
        Ok(ProgramCounterStep::Next)
    }

    fn jump_offset(&self, nnn: usize) -> Result<ProgramCounterStep, ProcessError> {
        let v0 = self.registers[0] as usize;
        Ok(ProgramCounterStep::Jump((nnn + v0) & memory::ADDRESS_MASK))
    }

    fn random(&mut self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError> {
        // using a fill bytes call here, as the trait RngCore does not
        // support random u8.
        let mut rand: [u8; 1] = [0];
        self.rng.fill_bytes(&mut rand);
        self.registers[x] = nn & rand[0];
        Ok(ProgramCounterStep::Next)
    }

    fn draw(
        &mut self,
        x: usize,
        y: usize,
        n: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        let coorx = self.registers[x] as usize % display::WIDTH;
        let coory = self.registers[y] as usize % display::HEIGHT;
        let rows = self.memory.read_slice(self.index_register as usize, n);

        let collided = self.display.blit(coorx, coory, &rows);
        self.registers[cpu::register::LAST] = collided as u8;

        Ok((ProgramCounterStep::Next, Operation::Draw))
    }

    fn skip_key(&self, cond: KeyCondition, x: usize) -> Result<ProgramCounterStep, ProcessError> {
        let pressed = self.keyboard.is_pressed(self.registers[x] & 0xF);
        let step = match cond {
            KeyCondition::Pressed => ProgramCounterStep::cond(pressed),
            KeyCondition::NotPressed => ProgramCounterStep::cond(!pressed),
        };
        Ok(step)
    }

    fn special(
        &mut self,
        ops: SpecialOp,
        x: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        let mut op = Operation::None;
        let mut pcs = ProgramCounterStep::Next;
        match ops {
            SpecialOp::GetDelayTimer => {
                self.registers[x] = self.timers.delay.get_value();
            }
            SpecialOp::AwaitKeyPress => {
                // only presses made after this point count
                while self.keyboard.next_key_press().is_some() {}

                log::debug!("awaiting key press for V{:X}", x);
                self.state = CpuState::AwaitingKey { register: x };
                op = Operation::Wait;
                // the counter moves once the key arrived
                pcs = ProgramCounterStep::None;
            }
            SpecialOp::SetDelayTimer => {
                self.timers.delay.set_value(self.registers[x]);
            }
            SpecialOp::SetSoundTimer => {
                self.set_sound_timer(self.registers[x]);
            }
            SpecialOp::AddToIndex => {
                let sum = self.index_register as u32 + self.registers[x] as u32;
                self.index_register = sum as u16;
                self.registers[cpu::register::LAST] = (sum > memory::ADDRESS_MASK as u32) as u8;
            }
            SpecialOp::LoadGlyph => {
                let digit = (self.registers[x] & 0xF) as usize;
                self.index_register =
                    (display::fontset::LOCATION + display::fontset::GLYPH_SIZE * digit) as u16;
            }
            SpecialOp::StoreBcd => {
                let i = self.index_register as usize;
                let r = self.registers[x];

                self.memory.write(i, r / 100); // 246u8 / 100 => 2
                self.memory.write(i + 1, r / 10 % 10); // 246u8 / 10 => 24 % 10 => 4
                self.memory.write(i + 2, r % 10); // 246u8 % 10 => 6
            }
            SpecialOp::StoreRegisters => {
                // I itself is left unmodified
                let index = self.index_register as usize;
                for (offset, value) in self.registers[..=x].iter().enumerate() {
                    self.memory.write(index + offset, *value);
                }
            }
            SpecialOp::LoadRegisters => {
                let index = self.index_register as usize;
                for offset in 0..=x {
                    self.registers[offset] = self.memory.read(index + offset);
                }
            }
        }
        Ok((pcs, op))
    }
}
