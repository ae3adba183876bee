use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::constants::{ADDRESS_MASK, PROGRAM_START, REGISTER_COUNT};
use crate::display::Display;
use crate::error::{Error, Result};
use crate::keypad::Keypad;
use crate::memory::Memory;

/// Whether the fetch-decode-execute loop may run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Running,
    /// Suspended by the host
    Paused,
    /// Suspended by `Fx0A` until a key is released; the key goes into `register`
    AwaitingKey { register: u8 },
}

/// A snapshot of the machine's internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry/borrow/collision flag
/// - (i) a 12-bit memory address register
///
/// Counter
/// - (pc) a 12-bit program counter
///
/// Stack
/// - return addresses pushed by `2nnn` and popped by `00EE`
/// - holds at most `stack_capacity` entries
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented once per tick while non-zero
///
/// ## Memory
/// - 4096 bytes of addressable memory, font sheet at 0x000
/// - a 64x32 display surface
///
/// ## Input
/// - a 16-bit latch of held keys
/// - `execution` records a pending key-wait and its target register
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub stack: Vec<u16>,
    pub stack_capacity: usize,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub memory: Memory,
    pub display: Display,
    pub keypad: Keypad,
    pub execution: Execution,
    pub rng: StdRng,
}

impl State {
    pub fn new(config: &Config) -> Result<Self> {
        let mut stack = Vec::new();
        stack
            .try_reserve_exact(config.stack_capacity)
            .map_err(|source| Error::Allocation {
                what: "call stack",
                source,
            })?;

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let execution = if config.start_paused {
            Execution::Paused
        } else {
            Execution::Running
        };

        Ok(State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            stack,
            stack_capacity: config.stack_capacity,
            delay_timer: 0,
            sound_timer: 0,
            memory: Memory::new()?,
            display: Display::new(),
            keypad: Keypad::new(),
            execution,
            rng,
        })
    }

    /// Reads the opcode at the PC and moves the PC past it
    pub fn fetch(&mut self) -> u16 {
        let op = self.memory.read_word(self.pc);
        self.advance_pc();
        op
    }

    /// Steps over the next instruction
    pub fn advance_pc(&mut self) {
        self.pc = self.pc.wrapping_add(2) & ADDRESS_MASK;
    }

    pub fn jump(&mut self, addr: u16) {
        self.pc = addr & ADDRESS_MASK;
    }

    pub fn set_i(&mut self, addr: u16) {
        self.i = addr & ADDRESS_MASK;
    }

    pub fn is_running(&self) -> bool {
        self.execution == Execution::Running
    }
}
