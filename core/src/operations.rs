use rand::Rng;

use crate::constants::{FLAG, FONT_ADDRESS, FONT_GLYPH_SIZE};
use crate::diagnostics::{Anomaly, Outcome};
use crate::opcode::Opcode;
use crate::state::{Execution, State};

// Every family handler takes the full opcode plus the pre-extracted x and y
// register indices. The PC already points past the opcode when they run.

/// Returns `Executed`, skipping the next instruction when `condition` holds
fn skip_if(state: &mut State, condition: bool) -> Outcome {
    if condition {
        state.advance_pc();
    }
    Outcome::Executed
}

const IGNORED: Outcome = Outcome::Ignored(Anomaly::UnrecognizedSubopcode);

/// 0nnn
/// `00E0` clear, `00EE` return, anything else is ignored
pub fn system(state: &mut State, op: u16, _x: u8, _y: u8) -> Outcome {
    match op {
        0x00E0 => clr(state),
        0x00EE => rts(state),
        _ => IGNORED,
    }
}

/// clear
fn clr(state: &mut State) -> Outcome {
    state.display.clear();
    Outcome::Executed
}

/// PC = STACK.pop()
fn rts(state: &mut State) -> Outcome {
    match state.stack.pop() {
        Some(addr) => {
            state.jump(addr);
            Outcome::Executed
        }
        None => Outcome::Ignored(Anomaly::StackUnderflow),
    }
}

/// PC = nnn
pub fn jump(state: &mut State, op: u16, _x: u8, _y: u8) -> Outcome {
    state.jump(op.nnn());
    Outcome::Executed
}

/// STACK.push(PC); PC = nnn
/// With a full stack the push is dropped but the jump still happens
pub fn call(state: &mut State, op: u16, _x: u8, _y: u8) -> Outcome {
    let outcome = if state.stack.len() < state.stack_capacity {
        state.stack.push(state.pc);
        Outcome::Executed
    } else {
        Outcome::Ignored(Anomaly::StackOverflow)
    };
    state.jump(op.nnn());
    outcome
}

/// if Vx == nn then skip
pub fn ske(state: &mut State, op: u16, x: u8, _y: u8) -> Outcome {
    let condition = state.v[x as usize] == op.nn();
    skip_if(state, condition)
}

/// if Vx != nn then skip
pub fn skne(state: &mut State, op: u16, x: u8, _y: u8) -> Outcome {
    let condition = state.v[x as usize] != op.nn();
    skip_if(state, condition)
}

/// if Vx == Vy then skip
pub fn skre(state: &mut State, op: u16, x: u8, y: u8) -> Outcome {
    if op.n() != 0x0 {
        return IGNORED;
    }
    let condition = state.v[x as usize] == state.v[y as usize];
    skip_if(state, condition)
}

/// Vx = nn
pub fn load(state: &mut State, op: u16, x: u8, _y: u8) -> Outcome {
    state.v[x as usize] = op.nn();
    Outcome::Executed
}

/// Vx += nn
/// Wraps; VF is left alone
pub fn add(state: &mut State, op: u16, x: u8, _y: u8) -> Outcome {
    state.v[x as usize] = state.v[x as usize].wrapping_add(op.nn());
    Outcome::Executed
}

/// 8xyn
/// Register to register arithmetic and logic, selected by n.
///
/// Flags are computed from the operands before anything is written, and are
/// written after the result so that `x == F` ends up holding the flag.
pub fn alu(state: &mut State, op: u16, x: u8, y: u8) -> Outcome {
    let vx = state.v[x as usize];
    let vy = state.v[y as usize];

    let (result, flag) = match op.n() {
        // Vx = Vy
        0x0 => (vy, None),
        // Vx |= Vy
        0x1 => (vx | vy, None),
        // Vx &= Vy
        0x2 => (vx & vy, None),
        // Vx ^= Vy
        0x3 => (vx ^ vy, None),
        // Vx += Vy; VF = carry
        0x4 => {
            let (sum, carry) = vx.overflowing_add(vy);
            (sum, Some(carry as u8))
        }
        // Vx -= Vy; VF = !borrow
        0x5 => (vx.wrapping_sub(vy), Some((vx >= vy) as u8)),
        // Vx >>= 1; VF = lsb
        0x6 => (vx >> 1, Some(vx & 0x1)),
        // Vx = Vy - Vx; VF = !borrow
        0x7 => (vy.wrapping_sub(vx), Some((vy >= vx) as u8)),
        // Vx <<= 1; VF = msb
        0xE => (vx << 1, Some((vx & 0x80) >> 7)),
        _ => return IGNORED,
    };

    state.v[x as usize] = result;
    if let Some(flag) = flag {
        state.v[FLAG] = flag;
    }
    Outcome::Executed
}

/// if Vx != Vy then skip
pub fn skrne(state: &mut State, op: u16, x: u8, y: u8) -> Outcome {
    if op.n() != 0x0 {
        return IGNORED;
    }
    let condition = state.v[x as usize] != state.v[y as usize];
    skip_if(state, condition)
}

/// I = nnn
pub fn loadi(state: &mut State, op: u16, _x: u8, _y: u8) -> Outcome {
    state.set_i(op.nnn());
    Outcome::Executed
}

/// PC = Vx + nnn
/// The offset register is the opcode's own x, not V0
pub fn jumpi(state: &mut State, op: u16, x: u8, _y: u8) -> Outcome {
    let target = u16::from(state.v[x as usize]) + op.nnn();
    state.jump(target);
    Outcome::Executed
}

/// Vx = rand_byte & nn
pub fn rand(state: &mut State, op: u16, x: u8, _y: u8) -> Outcome {
    let rand_byte: u8 = state.rng.gen();
    state.v[x as usize] = rand_byte & op.nn();
    Outcome::Executed
}

/// draw_sprite(x=Vx y=Vy height=n)
/// XORs the sprite at mem[I..I+n] onto the display at (Vx, Vy) with wrapping.
/// VF = 1 if any lit pixel was erased, else 0
pub fn draw(state: &mut State, op: u16, x: u8, y: u8) -> Outcome {
    // Reset the flag first; the coordinates are read after, as VF may be x or y
    state.v[FLAG] = 0x0;
    let origin_x = state.v[x as usize] as usize;
    let origin_y = state.v[y as usize] as usize;

    let mut collided = false;
    for row in 0..op.n() as usize {
        let sprite = state.memory.read(state.i.wrapping_add(row as u16));
        collided |= state.display.blit_row(origin_x, origin_y + row, sprite);
    }

    if collided {
        state.v[FLAG] = 0x1;
    }
    Outcome::Executed
}

/// Ex9E / ExA1
/// Skip if the key in the low nibble of Vx is / isn't held
pub fn skkey(state: &mut State, op: u16, x: u8, _y: u8) -> Outcome {
    let pressed = state.keypad.is_pressed(state.v[x as usize] & 0xF);
    match op.nn() {
        0x9E => skip_if(state, pressed),
        0xA1 => skip_if(state, !pressed),
        _ => IGNORED,
    }
}

/// Fxnn
/// Timers, key-wait, I arithmetic and memory transfers, selected by nn
pub fn misc(state: &mut State, op: u16, x: u8, _y: u8) -> Outcome {
    let x = x as usize;
    match op.nn() {
        0x07 => state.v[x] = state.delay_timer,
        0x0A => keyd(state, x as u8),
        0x15 => state.delay_timer = state.v[x],
        0x18 => state.sound_timer = state.v[x],
        0x1E => state.set_i(state.i.wrapping_add(u16::from(state.v[x]))),
        0x29 => {
            let glyph = u16::from(state.v[x] & 0xF);
            state.set_i(FONT_ADDRESS + glyph * FONT_GLYPH_SIZE);
        }
        0x33 => bcd(state, x),
        0x55 => stor(state, x),
        0x65 => read(state, x),
        _ => return IGNORED,
    }
    Outcome::Executed
}

/// await key release for Vx
fn keyd(state: &mut State, register: u8) {
    log::debug!("awaiting key for V{:X}", register);
    state.execution = Execution::AwaitingKey { register };
}

/// mem[I..I+3] = bcd(Vx)
fn bcd(state: &mut State, x: usize) {
    let value = state.v[x];
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, digit) in digits.iter().enumerate() {
        state.memory.write(state.i.wrapping_add(offset as u16), *digit);
    }
}

/// mem[I..=I+x] = V0..=Vx
fn stor(state: &mut State, x: usize) {
    for register in 0..=x {
        let addr = state.i.wrapping_add(register as u16);
        state.memory.write(addr, state.v[register]);
    }
}

/// V0..=Vx = mem[I..=I+x]
fn read(state: &mut State, x: usize) {
    for register in 0..=x {
        let addr = state.i.wrapping_add(register as u16);
        state.v[register] = state.memory.read(addr);
    }
}
