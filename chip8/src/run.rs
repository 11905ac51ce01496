use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use vm8::{Chip8, ClockConfig, Scheduler};
use vm8_display::{Display, DisplayError, Palette};

use crate::keymap::keymap;

/// Everything the driver can be configured with
pub struct Options {
    pub clock: ClockConfig,
    pub scale: u32,
    pub seed: Option<u64>,
    pub palette: Palette,
}

pub fn run(rom: &Path, options: Options) -> Result<(), Box<dyn Error>> {
    let mut chip8 = match options.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };

    // Load ROM
    log::info!("loading {}", rom.display());
    let file = File::open(rom)?;
    log::info!("file size: {} bytes", file.metadata()?.len());
    let mut reader = BufReader::new(file);
    let size = chip8.load_rom(&mut reader)?;
    log::info!("successfully loaded {} byte ROM", size);

    // Get SDL2 context
    let sdl = sdl2::init().map_err(DisplayError::Sdl)?;
    let mut display = Display::new(&sdl, options.scale, options.palette)?;
    let mut events = sdl.event_pump().map_err(DisplayError::Sdl)?;

    let mut scheduler = Scheduler::new(options.clock);
    let mut last_cycle = Instant::now();

    // Whether or not the default clock speed should be respected
    let mut fast_forward = false;
    // Set once the ROM faults; the last frame stays up until the window is closed
    let mut halted = false;

    'event: loop {
        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.take_frame() {
            display.render(&frame)?;
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        let now = Instant::now();
        let mut elapsed = now - last_cycle;
        last_cycle = now;
        if fast_forward {
            // run a whole tick's worth every pass instead of waiting for the clock
            elapsed = elapsed.max(scheduler.interval());
        }
        if !halted {
            if let Err(fault) = scheduler.run(&mut chip8, elapsed) {
                log::error!("halting: {}", fault);
                halted = true;
            }
        }

        // Handle timing
        if !fast_forward {
            std::thread::sleep(scheduler.until_next_tick());
        }
    }

    Ok(())
}
