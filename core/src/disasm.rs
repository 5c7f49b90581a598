//! Human-readable forms of opcodes and machine state, for tracing.
//!
//! The core never prints; callers feed these through their own logging.

use std::fmt;

use crate::opcode::Opcode;
use crate::state::State;

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = (self.x(), self.y());
        match self.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => write!(f, "CLEAR DISPLAY"),
            (0x0, 0x0, 0xE, 0xE) => write!(f, "RETURN"),
            (0x0, ..) => write!(f, "CALL PROGRAM @ {:03X}", self.addr()),
            (0x1, ..) => write!(f, "GOTO {:03X}", self.addr()),
            (0x2, ..) => write!(f, "SUBCALL {:03X}", self.addr()),
            (0x3, ..) => write!(f, "SKIPIF V{:X} == {:02X}", x, self.kk()),
            (0x4, ..) => write!(f, "SKIPIF V{:X} != {:02X}", x, self.kk()),
            (0x5, .., 0x0) => write!(f, "SKIPIF V{:X} == V{:X}", x, y),
            (0x6, ..) => write!(f, "SET V{:X} = {:02X}", x, self.kk()),
            (0x7, ..) => write!(f, "V{:X} += {:02X}", x, self.kk()),
            (0x8, .., 0x0) => write!(f, "SET V{:X} = V{:X}", x, y),
            (0x8, .., 0x1) => write!(f, "V{:X} |= V{:X}", x, y),
            (0x8, .., 0x2) => write!(f, "V{:X} &= V{:X}", x, y),
            (0x8, .., 0x3) => write!(f, "V{:X} ^= V{:X}", x, y),
            (0x8, .., 0x4) => write!(f, "V{:X} += V{:X}", x, y),
            (0x8, .., 0x5) => write!(f, "V{:X} -= V{:X}", x, y),
            (0x8, .., 0x6) => write!(f, "V{:X} >>= 1", x),
            (0x8, .., 0x7) => write!(f, "V{:X} = V{:X} - V{:X}", x, y, x),
            (0x8, .., 0xE) => write!(f, "V{:X} <<= 1", x),
            (0x9, .., 0x0) => write!(f, "SKIPIF V{:X} != V{:X}", x, y),
            (0xA, ..) => write!(f, "SET I = {:03X}", self.addr()),
            (0xB, ..) => write!(f, "GOTO {:03X} + V0", self.addr()),
            (0xC, ..) => write!(f, "SET V{:X} = RAND & {:02X}", x, self.kk()),
            (0xD, ..) => write!(f, "DRAW V{:X} V{:X} {:X}", x, y, self.n()),
            (0xE, .., 0x9, 0xE) => write!(f, "SKIPIF KEY V{:X}", x),
            (0xE, .., 0xA, 0x1) => write!(f, "SKIPIF !KEY V{:X}", x),
            (0xF, .., 0x0, 0x7) => write!(f, "SET V{:X} = DELAY", x),
            (0xF, .., 0x0, 0xA) => write!(f, "WAITKEY V{:X}", x),
            (0xF, .., 0x1, 0x5) => write!(f, "SET DELAY = V{:X}", x),
            (0xF, .., 0x1, 0x8) => write!(f, "SET SOUND = V{:X}", x),
            (0xF, .., 0x1, 0xE) => write!(f, "I += V{:X}", x),
            (0xF, .., 0x2, 0x9) => write!(f, "SET I = GLYPH V{:X}", x),
            (0xF, .., 0x3, 0x3) => write!(f, "BCD V{:X} @ I", x),
            (0xF, .., 0x5, 0x5) => write!(f, "STORE V0..V{:X} @ I", x),
            (0xF, .., 0x6, 0x5) => write!(f, "LOAD V0..V{:X} @ I", x),
            _ => write!(f, "UNKNOWN {:04X}", self.0),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "PC = {:04X}\tI = {:04X}\tDEL = {:02X}\tSND = {:02X}",
            self.pc, self.i, self.delay_timer, self.sound_timer
        )?;
        for row in (0..16).step_by(4) {
            writeln!(
                f,
                "V{:X} = {:02X}\tV{:X} = {:02X}\tV{:X} = {:02X}\tV{:X} = {:02X}",
                row,
                self.v[row],
                row + 1,
                self.v[row + 1],
                row + 2,
                self.v[row + 2],
                row + 3,
                self.v[row + 3]
            )?;
        }
        write!(f, "Stack:")?;
        for idx in 0..=self.sp {
            write!(f, " {:03X}", self.stack[idx as usize])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_disasm {
    use super::*;

    #[test]
    fn test_fixed_function_opcodes() {
        assert_eq!(Opcode(0x00E0).to_string(), "CLEAR DISPLAY");
        assert_eq!(Opcode(0x00EE).to_string(), "RETURN");
    }

    #[test]
    fn test_address_opcodes() {
        assert_eq!(Opcode(0x1250).to_string(), "GOTO 250");
        assert_eq!(Opcode(0x2ABC).to_string(), "SUBCALL ABC");
        assert_eq!(Opcode(0xA123).to_string(), "SET I = 123");
    }

    #[test]
    fn test_register_opcodes() {
        assert_eq!(Opcode(0x3111).to_string(), "SKIPIF V1 == 11");
        assert_eq!(Opcode(0x8127).to_string(), "V1 = V2 - V1");
        assert_eq!(Opcode(0xD125).to_string(), "DRAW V1 V2 5");
        assert_eq!(Opcode(0xF733).to_string(), "BCD V7 @ I");
    }

    #[test]
    fn test_unmatched_words() {
        assert_eq!(Opcode(0xF1FF).to_string(), "UNKNOWN F1FF");
    }

    #[test]
    fn test_state_dump_lists_the_stack_top_last() {
        let mut state = crate::state::State::with_rom(&[]).unwrap();
        state.sp = 0x1;
        state.stack[0x0] = 0x202;
        state.stack[0x1] = 0x30A;
        let dump = state.to_string();
        assert!(dump.starts_with("PC = 0200"));
        assert!(dump.ends_with("Stack: 202 30A"));
    }
}
