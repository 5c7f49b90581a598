/// Failures the interpreter can report.
///
/// Every variant is a deterministic function of the current state; the core
/// performs no I/O so there is no transient/retryable class. `UnknownOpcode`
/// is the one survivable condition: the word is diagnosable and the caller
/// may skip it or halt. Everything else means control-flow or memory state
/// is no longer trustworthy and the session should end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("ROM is {size} bytes but program memory holds {max_size}")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("subroutine call with a full stack")]
    StackOverflow,

    #[error("return with an empty stack")]
    StackUnderflow,

    #[error("no font glyph for value {value:#04X}")]
    InvalidFontIndex { value: u8 },

    #[error("unknown opcode {opcode:#06X}")]
    UnknownOpcode { opcode: u16 },

    #[error("memory access out of bounds at {address:#06X}")]
    MemoryOutOfBounds { address: usize },
}
