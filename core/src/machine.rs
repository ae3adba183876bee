use std::io::Read;

use crate::config::Config;
use crate::constants::{KEY_COUNT, MEMORY_SIZE, PROGRAM_START, REGISTER_COUNT};
use crate::diagnostics::{Diagnostics, Outcome};
use crate::display::Display;
use crate::error::Result;
use crate::instruction;
use crate::state::{Execution, State};

/// # Machine
/// An owned virtual machine driven one frame at a time by its host.
///
/// Tracks:
///  - the current `state`
///  - the instruction budget of each `tick`
///  - `diagnostics` about what has been executed and ignored
///
/// Supplies interfaces for:
/// - loading programs
/// - pressing and releasing keys
/// - advancing a frame (timers, then up to `instructions_per_tick` instructions)
/// - inspecting the display for rendering by some host
pub struct Machine {
    state: State,
    instructions_per_tick: u32,
    diagnostics: Diagnostics,
}

impl Machine {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Machine {
            state: State::new(&config)?,
            instructions_per_tick: config.instructions_per_tick,
            diagnostics: Diagnostics::default(),
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(Config::default())
    }

    /// Copies a program into memory at `offset` and points the PC at 0x200
    ///
    /// # Arguments
    /// * `program` the raw instruction stream
    /// * `offset` where in memory the first byte goes, conventionally 0x200
    pub fn load_program(&mut self, program: &[u8], offset: u16) -> Result<()> {
        self.state.memory.load(offset, program)?;
        self.state.pc = PROGRAM_START;
        log::info!(
            "loaded {} byte program at {:#05X}",
            program.len(),
            offset
        );
        Ok(())
    }

    /// Reads a ROM and loads it at 0x200
    ///
    /// At most one byte more than fits is read, so an oversized stream is
    /// rejected without being buffered in full.
    ///
    /// # Arguments
    /// * `reader` a source of ROM bytes, e.g. a file
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let capacity = MEMORY_SIZE - PROGRAM_START as usize;
        let mut program = Vec::with_capacity(capacity);
        reader.take(capacity as u64 + 1).read_to_end(&mut program)?;
        self.load_program(&program, PROGRAM_START)
    }

    /// Advances one frame
    /// - does nothing at all if the machine is paused or awaiting a key
    /// - decrements each non-zero timer once
    /// - executes up to `instructions_per_tick` instructions, stopping as soon
    ///   as the machine stops running
    pub fn tick(&mut self) {
        if !self.state.is_running() {
            return;
        }

        self.advance_timers();

        for _ in 0..self.instructions_per_tick {
            if !self.state.is_running() {
                break;
            }
            self.step();
        }
    }

    /// Executes a single fetch-decode-execute cycle if running
    pub fn step(&mut self) -> Outcome {
        if !self.state.is_running() {
            return Outcome::Halted;
        }
        let op = self.state.fetch();
        let outcome = instruction::execute(&mut self.state, op);
        self.diagnostics.record(op, outcome);
        outcome
    }

    /// Decrements each timer that is above zero
    fn advance_timers(&mut self) {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the key that went down, 0..F
    pub fn key_down(&mut self, key: u8) {
        self.state.keypad.press(key);
    }

    /// Unset the pressed status of key, resolving a pending key-wait.
    /// Any key resolves the wait.
    ///
    /// # Arguments
    /// * `key` the key that went up, 0..F
    pub fn key_up(&mut self, key: u8) {
        let key = key % KEY_COUNT as u8;
        self.state.keypad.release(key);
        if let Execution::AwaitingKey { register } = self.state.execution {
            log::debug!("key {:X} released into V{:X}", key, register);
            self.state.v[register as usize] = key;
            self.state.execution = Execution::Running;
        }
    }

    /// Suspends execution until `resume`
    pub fn pause(&mut self) {
        if self.state.execution == Execution::Running {
            self.state.execution = Execution::Paused;
        }
    }

    /// Lifts a host pause. A pending key-wait is only ever lifted by `key_up`,
    /// so this returns false and changes nothing while one is outstanding.
    pub fn resume(&mut self) -> bool {
        match self.state.execution {
            Execution::AwaitingKey { .. } => false,
            _ => {
                self.state.execution = Execution::Running;
                true
            }
        }
    }

    /// Whether the pixel at (x, y) is lit
    pub fn get_pixel(&self, x: u8, y: u8) -> bool {
        self.state.display.pixel(x as usize, y as usize)
    }

    /// Bit k is set while key k is held
    pub fn pressed_keys(&self) -> u16 {
        self.state.keypad.pressed_mask()
    }

    pub fn display(&self) -> &Display {
        &self.state.display
    }

    pub fn is_paused(&self) -> bool {
        !self.state.is_running()
    }

    pub fn execution(&self) -> Execution {
        self.state.execution
    }

    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.state.v
    }

    pub fn register(&self, x: u8) -> u8 {
        self.state.v[x as usize % REGISTER_COUNT]
    }

    pub fn address_register(&self) -> u16 {
        self.state.i
    }

    pub fn program_counter(&self) -> u16 {
        self.state.pc
    }

    pub fn stack_depth(&self) -> usize {
        self.state.stack.len()
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    /// Whether the host should be sounding its tone
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    pub fn memory(&self) -> &[u8] {
        self.state.memory.as_slice()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn instructions_per_tick(&self) -> u32 {
        self.instructions_per_tick
    }
}
