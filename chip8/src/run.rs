use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use log::{debug, trace, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::constants::TIMER_HZ;
use chip8_core::{Chip8, Error, Outcome, ThreadRandom};
use chip8_display::Display;

use crate::keymap::keymap;

pub fn run(rom: &Path, clock: u64) -> anyhow::Result<()> {
    let rom_bytes =
        fs::read(rom).with_context(|| format!("unable to read ROM {}", rom.display()))?;
    let mut chip8 = Chip8::new(&rom_bytes).context("unable to load ROM")?;
    debug!("loaded {} byte ROM", rom_bytes.len());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let mut display = Display::new(&sdl).map_err(anyhow::Error::msg)?;
    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;

    let mut random = ThreadRandom;
    let mut pressed: [bool; 16] = [false; 16];

    // Set initial timing; timers run on their own 60Hz cadence, decoupled
    // from instruction throughput
    let cycle_time = Duration::from_nanos(1_000_000_000 / clock.max(1));
    let tick_time = Duration::from_nanos(1_000_000_000 / TIMER_HZ);
    let mut last_cycle = Instant::now();
    let mut last_tick = Instant::now();

    // Whether or not the configured clock should be respected
    let mut fast_forward = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => pressed[kc as usize] = true,
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => pressed[kc as usize] = false,
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        if last_tick.elapsed() >= tick_time {
            chip8.tick_timers();
            last_tick = Instant::now();
        }

        // Update state, re-presenting the frame only when it changed
        match chip8.step(&pressed, &mut random) {
            Ok(Outcome::DisplayDirty) => {
                display.render(chip8.frame()).map_err(anyhow::Error::msg)?
            }
            Ok(Outcome::KeyWaitBlocked) => trace!("waiting for a key"),
            Ok(Outcome::Normal) | Ok(Outcome::KeyQuery) => {}
            Err(e @ Error::UnknownOpcode { .. }) => {
                warn!("halting: {}", e);
                break 'event;
            }
            Err(e) => return Err(e.into()),
        }
        trace!("\n{}", chip8.state());

        // Handle timing
        let elapsed_cycle_time = last_cycle.elapsed();
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    Ok(())
}
