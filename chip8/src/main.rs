use std::path::PathBuf;
use std::process;

use clap::Parser;

use vm8::ClockConfig;
use vm8_display::{HexColor, Palette};

mod keymap;
mod run;

/// Runs a Chip-8 ROM in an SDL2 window
#[derive(Parser, Debug)]
#[command(name = "vm8", version)]
struct Args {
    /// Path to the ROM to run
    rom: PathBuf,

    /// Instructions executed per 60Hz timer tick
    #[arg(long, default_value_t = vm8::constants::DEFAULT_INSTRUCTIONS_PER_TICK)]
    instructions_per_tick: u32,

    /// Size multiplier for each pixel
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=64))]
    scale: u32,

    /// Seed for the random number instruction
    #[arg(long)]
    seed: Option<u64>,

    /// Colour of lit pixels, as RRGGBB
    #[arg(long, default_value = "FFFFFF")]
    foreground: HexColor,

    /// Colour of unlit pixels, as RRGGBB
    #[arg(long, default_value = "000000")]
    background: HexColor,
}

impl Args {
    fn options(&self) -> run::Options {
        run::Options {
            clock: ClockConfig {
                instructions_per_tick: self.instructions_per_tick,
                ..ClockConfig::default()
            },
            scale: self.scale,
            seed: self.seed,
            palette: Palette {
                foreground: self.foreground.0,
                background: self.background.0,
            },
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("vm8=info")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version aren't failures
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    if let Err(e) = run::run(&args.rom, args.options()) {
        log::error!("{}", e);
        process::exit(1);
    }
}
