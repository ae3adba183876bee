use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chipvm_core::{Config, Machine, TICKS_PER_SECOND};
use chipvm_display::Display;

use crate::audio::Beeper;
use crate::keymap::keymap;

const TITLE: &str = "chipvm";

/// Settings gathered from the command line
pub struct Settings {
    pub rom: PathBuf,
    pub instructions_per_tick: u32,
    pub scale: u32,
    pub seed: Option<u64>,
}

pub fn run(settings: Settings) -> anyhow::Result<()> {
    let mut config = Config::new(settings.instructions_per_tick, true);
    if let Some(seed) = settings.seed {
        config = config.rng_seed(seed);
    }
    let mut machine = Machine::new(config)?;

    // Load ROM while paused, then start
    let file = File::open(&settings.rom)
        .with_context(|| format!("unable to open {}", settings.rom.display()))?;
    let mut reader = BufReader::new(file);
    machine.load_rom(&mut reader)?;
    machine.resume();

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display = Display::new(&sdl, TITLE, settings.scale).map_err(|e| anyhow!(e))?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;
    let mut beeper = match Beeper::new(&sdl) {
        Ok(beeper) => Some(beeper),
        Err(e) => {
            log::warn!("no audio device, continuing without sound: {}", e);
            None
        }
    };

    let frame_time = Duration::from_secs(1) / TICKS_PER_SECOND;
    let mut last_frame = Instant::now();

    'event: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(pad) = keymap(key) {
                        machine.key_down(pad);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(pad) = keymap(key) {
                        machine.key_up(pad);
                    }
                }
                _ => continue,
            };
        }

        machine.tick();
        display
            .render(machine.display().frame_buffer())
            .map_err(|e| anyhow!(e))?;
        if let Some(beeper) = beeper.as_mut() {
            beeper.set(machine.sound_active());
        }

        // Hold the tick rate
        let elapsed = last_frame.elapsed();
        if frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
        last_frame = Instant::now();
    }

    let ignored = machine.diagnostics().ignored();
    if ignored > 0 {
        log::info!("{} instructions were ignored during the session", ignored);
    }
    Ok(())
}
