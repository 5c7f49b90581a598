use sdl2::keyboard::Keycode;

/// Chip-8 input comes from a hexadecimal keypad; its 4x4 block sits on the
/// left alphanumeric columns of a QWERTY keyboard.
///
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
///
/// Indexed by key code, so `KEYMAP[0xA]` is the key bound to pad key A.
const KEYMAP: [Keycode; 16] = [
    Keycode::X,    // 0
    Keycode::Num1, // 1
    Keycode::Num2, // 2
    Keycode::Num3, // 3
    Keycode::Q,    // 4
    Keycode::W,    // 5
    Keycode::E,    // 6
    Keycode::A,    // 7
    Keycode::S,    // 8
    Keycode::D,    // 9
    Keycode::Z,    // A
    Keycode::C,    // B
    Keycode::Num4, // C
    Keycode::R,    // D
    Keycode::F,    // E
    Keycode::V,    // F
];

/// The pad key code bound to a keyboard key, if any.
pub fn keymap(key: Keycode) -> Option<u8> {
    KEYMAP.iter().position(|&bound| bound == key).map(|code| code as u8)
}

#[cfg(test)]
mod test_keymap {
    use super::*;

    #[test]
    fn test_pad_corners() {
        assert_eq!(keymap(Keycode::Num1), Some(0x1));
        assert_eq!(keymap(Keycode::Num4), Some(0xC));
        assert_eq!(keymap(Keycode::Z), Some(0xA));
        assert_eq!(keymap(Keycode::V), Some(0xF));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(keymap(Keycode::P), None);
    }
}
