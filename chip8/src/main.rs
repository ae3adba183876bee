use std::path::PathBuf;

use clap::Parser;

use chipvm_core::constants::DEFAULT_INSTRUCTIONS_PER_TICK;
use chipvm_display::DEFAULT_SCALE;

mod audio;
mod keymap;
mod run;

/// A CHIP-8 interpreter
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM to run
    rom: PathBuf,

    /// Instructions executed per 60 Hz tick
    #[arg(long, default_value_t = DEFAULT_INSTRUCTIONS_PER_TICK)]
    ipt: u32,

    /// Size multiplier for each display cell
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: u32,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Log every executed instruction
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over the flag when it's set
    let default_filter = if args.verbose { "trace" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    run::run(run::Settings {
        rom: args.rom,
        instructions_per_tick: args.ipt,
        scale: args.scale,
        seed: args.seed,
    })
}
