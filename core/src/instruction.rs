use crate::error::Error;
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::random::RandomSource;
use crate::state::State;

/// An executable instruction: a pure function from one state to its successor.
pub type Operation =
    fn(Opcode, &State, &dyn Keypad, &mut dyn RandomSource) -> Result<Transition, Error>;

/// Selects the Operation for a given Opcode.
///
/// Matching is on the leading nibble, with low-nibble discriminants for the
/// 0x0, 0x8, 0xE, and 0xF families; the patterns are mutually exclusive.
/// Decoding never touches the state, so an unrecognized word is reported
/// with nothing mutated.
pub fn decode(op: Opcode) -> Result<Operation, Error> {
    let operation: Operation = match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => clr,
        (0x0, 0x0, 0xE, 0xE) => rts,
        (0x0, ..) => sys,
        (0x1, ..) => jump,
        (0x2, ..) => call,
        (0x3, ..) => ske,
        (0x4, ..) => skne,
        (0x5, .., 0x0) => skre,
        (0x6, ..) => load,
        (0x7, ..) => add,
        (0x8, .., 0x0) => mv,
        (0x8, .., 0x1) => or,
        (0x8, .., 0x2) => and,
        (0x8, .., 0x3) => xor,
        (0x8, .., 0x4) => addr,
        (0x8, .., 0x5) => sub,
        (0x8, .., 0x6) => shr,
        (0x8, .., 0x7) => subn,
        (0x8, .., 0xE) => shl,
        (0x9, .., 0x0) => skrne,
        (0xA, ..) => loadi,
        (0xB, ..) => jumpi,
        (0xC, ..) => rand,
        (0xD, ..) => draw,
        (0xE, .., 0x9, 0xE) => skpr,
        (0xE, .., 0xA, 0x1) => skup,
        (0xF, .., 0x0, 0x7) => moved,
        (0xF, .., 0x0, 0xA) => keyd,
        (0xF, .., 0x1, 0x5) => loads,
        (0xF, .., 0x1, 0x8) => ld,
        (0xF, .., 0x1, 0xE) => addi,
        (0xF, .., 0x2, 0x9) => ldspr,
        (0xF, .., 0x3, 0x3) => bcd,
        (0xF, .., 0x5, 0x5) => stor,
        (0xF, .., 0x6, 0x5) => read,
        _ => return Err(Error::UnknownOpcode { opcode: op.0 }),
    };
    Ok(operation)
}
