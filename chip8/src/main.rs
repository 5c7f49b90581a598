use std::path::PathBuf;

use clap::Parser;

mod keymap;
mod run;

/// Chip-8 interpreter with an SDL2 front end
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Interpreter clock in instructions per second
    #[arg(long, default_value_t = chip8_core::constants::DEFAULT_CLOCK_HZ)]
    clock: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    run::run(&args.rom, args.clock)
}
