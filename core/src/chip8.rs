use log::trace;

use crate::constants::MEMORY_SIZE;
use crate::error::Error;
use crate::instruction;
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::outcome::Outcome;
use crate::random::RandomSource;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns the machine `state` for the lifetime of one emulation session.
///
/// Supplies interfaces for:
/// - advancing the CPU by exactly one instruction
/// - ticking the 60Hz timers on the caller's cadence
/// - inspecting the frame buffer for rendering by some display
///
/// The keypad and the random-byte source are passed into each step rather
/// than held here; scancode mapping, event pumping, and rng ownership stay
/// with the caller.
pub struct Chip8 {
    state: State,
}

impl Chip8 {
    /// Builds a machine with `rom` loaded at the program start address.
    pub fn new(rom: &[u8]) -> Result<Self, Error> {
        Ok(Chip8 {
            state: State::with_rom(rom)?,
        })
    }

    /// Fetches, decodes, and executes exactly one instruction.
    ///
    /// Exactly one of the documented effects happens before this returns;
    /// nothing blocks. A key-wait that finds no key down reports
    /// `KeyWaitBlocked` with the program counter untouched, and the caller
    /// re-invokes on its next cycle.
    pub fn step(
        &mut self,
        keypad: &dyn Keypad,
        random: &mut dyn RandomSource,
    ) -> Result<Outcome, Error> {
        let op = self.fetch()?;
        trace!("{:04X} : {}", op.0, op);
        let operation = instruction::decode(op)?;
        let transition = operation(op, &self.state, keypad, random)?;
        self.state = transition.state;
        Ok(transition.outcome)
    }

    /// The current frame, for presentation by some display.
    pub fn frame(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Read-only view of the machine state, for tracing and diagnostics.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Whether the sound timer is running; a beep for as long as it is.
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// One 60Hz tick: each timer counts down by one while nonzero.
    ///
    /// The interpreter never schedules this itself; the caller drives it
    /// from its own clock, decoupled from instruction throughput.
    pub fn tick_timers(&mut self) {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
    }

    /// Combines the two bytes at the pc into one big-endian opcode.
    fn fetch(&self) -> Result<Opcode, Error> {
        let pc = usize::from(self.state.pc);
        if pc + 1 >= MEMORY_SIZE {
            return Err(Error::MemoryOutOfBounds { address: pc });
        }
        let left = u16::from(self.state.memory[pc]);
        let right = u16::from(self.state.memory[pc + 1]);
        Ok(Opcode(left << 8 | right))
    }
}

#[cfg(test)]
mod test_chip8 {
    use super::*;

    struct FixedRandom(u8);

    impl RandomSource for FixedRandom {
        fn next_byte(&mut self) -> u8 {
            self.0
        }
    }

    const NO_KEYS: [bool; 16] = [false; 16];

    fn step(chip8: &mut Chip8) -> Result<Outcome, Error> {
        chip8.step(&NO_KEYS, &mut FixedRandom(0xAA))
    }

    #[test]
    fn test_fetch_combines_bytes_at_the_pc() {
        let chip8 = Chip8::new(&[0xAA, 0xBB]).unwrap();
        assert_eq!(chip8.fetch().unwrap(), Opcode(0xAABB));
    }

    #[test]
    fn test_fetch_rejects_a_pc_outside_memory() {
        let mut chip8 = Chip8::new(&[]).unwrap();
        chip8.state.pc = 0xFFF;
        assert_eq!(
            step(&mut chip8).unwrap_err(),
            Error::MemoryOutOfBounds { address: 0xFFF }
        );
    }

    #[test]
    fn test_step_advances_past_one_instruction() {
        // A cls opcode so there is something executable at 0x200
        let mut chip8 = Chip8::new(&[0x00, 0xE0]).unwrap();
        assert_eq!(step(&mut chip8).unwrap(), Outcome::DisplayDirty);
        assert_eq!(chip8.state.pc, 0x202);
    }

    #[test]
    fn test_step_surfaces_unknown_opcodes_without_advancing() {
        let mut chip8 = Chip8::new(&[0xF1, 0x00]).unwrap();
        assert_eq!(
            step(&mut chip8).unwrap_err(),
            Error::UnknownOpcode { opcode: 0xF100 }
        );
        assert_eq!(chip8.state.pc, 0x200);
    }

    #[test]
    fn test_step_blocks_on_key_wait_until_a_key_arrives() {
        let mut chip8 = Chip8::new(&[0xF1, 0x0A]).unwrap();
        assert_eq!(step(&mut chip8).unwrap(), Outcome::KeyWaitBlocked);
        assert_eq!(step(&mut chip8).unwrap(), Outcome::KeyWaitBlocked);
        assert_eq!(chip8.state.pc, 0x200);

        let mut keys = [false; 16];
        keys[0x7] = true;
        assert_eq!(
            chip8.step(&keys, &mut FixedRandom(0xAA)).unwrap(),
            Outcome::Normal
        );
        assert_eq!(chip8.state.v[0x1], 0x7);
        assert_eq!(chip8.state.pc, 0x202);
    }

    #[test]
    fn test_tick_timers_counts_down_while_nonzero() {
        let mut chip8 = Chip8::new(&[]).unwrap();
        chip8.state.delay_timer = 0x2;
        chip8.state.sound_timer = 0x1;
        chip8.tick_timers();
        assert_eq!(chip8.state.delay_timer, 0x1);
        assert_eq!(chip8.state.sound_timer, 0x0);
        assert!(!chip8.sound_active());
        chip8.tick_timers();
        assert_eq!(chip8.state.delay_timer, 0x0);
        assert_eq!(chip8.state.sound_timer, 0x0);
    }

    #[test]
    fn test_frame_exposes_the_frame_buffer() {
        let mut chip8 = Chip8::new(&[]).unwrap();
        chip8.state.frame_buffer[3][4] = 1;
        assert_eq!(chip8.frame()[3][4], 1);
    }
}
