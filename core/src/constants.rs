/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Address at which ROMs are loaded and execution begins.
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Return addresses the call stack can hold.
pub const STACK_DEPTH: usize = 24;

/// The display is a 64x32 grid of monochrome pixels.
pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Bytes per built-in font glyph; the glyph for digit `d` starts at `d * FONT_GLYPH_SIZE`.
pub const FONT_GLYPH_SIZE: u16 = 5;

/// Rate at which the delay and sound timers count down.
pub const TIMER_HZ: u64 = 60;

/// Default interpreter clock in instructions per second.
pub const DEFAULT_CLOCK_HZ: u64 = 1000;

/// # Sprite Sheet
/// Glyphs for the hex digits 0-F, stored at the bottom of memory.
///
/// Each glyph is 4 pixels wide and 5 rows tall, one byte per row with the
/// high bit leftmost. The low nibble of every row is unused.
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
