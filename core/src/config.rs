use crate::constants::{DEFAULT_INSTRUCTIONS_PER_TICK, DEFAULT_STACK_CAPACITY};

/// # Config
/// Everything a host decides about a machine before it is created.
///
/// - `instructions_per_tick` the instruction budget of a single `tick`; 0 only runs the timers
/// - `start_paused` whether the machine waits for `resume` before executing
/// - `stack_capacity` how many return addresses the call stack can hold
/// - `rng_seed` seeds `Cxnn`; `None` draws the seed from the OS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub instructions_per_tick: u32,
    pub start_paused: bool,
    pub stack_capacity: usize,
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn new(instructions_per_tick: u32, start_paused: bool) -> Self {
        Config {
            instructions_per_tick,
            start_paused,
            ..Config::default()
        }
    }

    pub fn instructions_per_tick(mut self, instructions_per_tick: u32) -> Self {
        self.instructions_per_tick = instructions_per_tick;
        self
    }

    pub fn start_paused(mut self, start_paused: bool) -> Self {
        self.start_paused = start_paused;
        self
    }

    pub fn stack_capacity(mut self, stack_capacity: usize) -> Self {
        self.stack_capacity = stack_capacity;
        self
    }

    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            instructions_per_tick: DEFAULT_INSTRUCTIONS_PER_TICK,
            start_paused: false,
            stack_capacity: DEFAULT_STACK_CAPACITY,
            rng_seed: None,
        }
    }
}
