pub use config::Config;
pub use constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, PROGRAM_START, TICKS_PER_SECOND};
pub use diagnostics::{Anomaly, Diagnostics, Outcome};
pub use display::{Display, FrameBuffer};
pub use error::{Error, Result};
pub use machine::Machine;
pub use state::Execution;

mod config;
pub mod constants;
mod diagnostics;
mod display;
mod error;
mod instruction;
mod keypad;
mod machine;
mod memory;
mod opcode;
mod operations;
mod state;
