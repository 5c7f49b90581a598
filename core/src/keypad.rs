/// # Keypad
/// A view of the 16-key hexadecimal keypad, supplied by the input
/// collaborator and consulted by the key-skip and key-wait instructions.
///
/// The interpreter never stores this; it is passed into each step so that
/// scancode mapping and event pumping stay outside the core.
pub trait Keypad {
    /// Whether the key with the given code (0x0..=0xF) is currently held.
    fn is_pressed(&self, key: u8) -> bool;
}

/// The runner (and the tests) track held keys as a plain array.
impl Keypad for [bool; 16] {
    fn is_pressed(&self, key: u8) -> bool {
        self.get(usize::from(key)).copied().unwrap_or(false)
    }
}
