/// # RandomSource
/// Supplies bytes for the masked-random instruction.
///
/// Injected into each step rather than read from a global so tests can pin
/// the sequence and get deterministic register contents.
pub trait RandomSource {
    fn next_byte(&mut self) -> u8;
}

/// Production source backed by the thread-local rng.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_byte(&mut self) -> u8 {
        rand::random()
    }
}
