use crate::diagnostics::Outcome;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A family handler: (state, opcode, x, y) -> what happened
pub type Handler = fn(state: &mut State, op: u16, x: u8, y: u8) -> Outcome;

/// The 16 opcode families, one per value of an opcode's top nibble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    System,
    Jump,
    Call,
    SkipEqual,
    SkipNotEqual,
    SkipRegistersEqual,
    Load,
    Add,
    Alu,
    SkipRegistersNotEqual,
    LoadI,
    JumpOffset,
    Random,
    Draw,
    Key,
    Misc,
}

impl Family {
    pub fn of(op: u16) -> Self {
        match op.nibbles() {
            (0x0, _, _, _) => Family::System,
            (0x1, _, _, _) => Family::Jump,
            (0x2, _, _, _) => Family::Call,
            (0x3, _, _, _) => Family::SkipEqual,
            (0x4, _, _, _) => Family::SkipNotEqual,
            (0x5, _, _, _) => Family::SkipRegistersEqual,
            (0x6, _, _, _) => Family::Load,
            (0x7, _, _, _) => Family::Add,
            (0x8, _, _, _) => Family::Alu,
            (0x9, _, _, _) => Family::SkipRegistersNotEqual,
            (0xA, _, _, _) => Family::LoadI,
            (0xB, _, _, _) => Family::JumpOffset,
            (0xC, _, _, _) => Family::Random,
            (0xD, _, _, _) => Family::Draw,
            (0xE, _, _, _) => Family::Key,
            _ => Family::Misc,
        }
    }

    pub fn handler(self) -> Handler {
        match self {
            Family::System => system,
            Family::Jump => jump,
            Family::Call => call,
            Family::SkipEqual => ske,
            Family::SkipNotEqual => skne,
            Family::SkipRegistersEqual => skre,
            Family::Load => load,
            Family::Add => add,
            Family::Alu => alu,
            Family::SkipRegistersNotEqual => skrne,
            Family::LoadI => loadi,
            Family::JumpOffset => jumpi,
            Family::Random => rand,
            Family::Draw => draw,
            Family::Key => skkey,
            Family::Misc => misc,
        }
    }
}

/// Selects the handler for a given Opcode
pub fn from_op(op: u16) -> Handler {
    Family::of(op).handler()
}

/// Routes an already-fetched opcode to its family handler
pub fn execute(state: &mut State, op: u16) -> Outcome {
    log::trace!(
        "{:04X} v{:02X?} i{:04X} pc{:04X}",
        op,
        state.v,
        state.i,
        state.pc
    );
    from_op(op)(state, op, op.x(), op.y())
}
