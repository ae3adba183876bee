use std::fmt;

/// Something a program did that the machine chose to ignore.
///
/// ROMs in the wild rely on these being harmless, so they never stop
/// execution; they are only counted and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anomaly {
    /// `2nnn` with a full stack; the jump happened but the return address was dropped
    StackOverflow,
    /// `00EE` with an empty stack; the PC was left alone
    StackUnderflow,
    /// An opcode whose operation nibble/byte isn't defined for its family
    UnrecognizedSubopcode,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::StackOverflow => write!(f, "stack overflow"),
            Anomaly::StackUnderflow => write!(f, "stack underflow"),
            Anomaly::UnrecognizedSubopcode => write!(f, "unrecognized sub-opcode"),
        }
    }
}

/// What executing a single instruction amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The instruction's documented effect was applied
    Executed,
    /// The instruction was a no-op for the given reason
    Ignored(Anomaly),
    /// Nothing ran; the machine is paused or awaiting a key
    Halted,
}

/// Running totals of what the machine has executed and ignored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub executed: u64,
    pub stack_overflows: u64,
    pub stack_underflows: u64,
    pub unrecognized: u64,
    pub last_ignored: Option<(u16, Anomaly)>,
}

impl Diagnostics {
    /// Tallies the outcome of executing `op`
    pub fn record(&mut self, op: u16, outcome: Outcome) {
        match outcome {
            Outcome::Executed => self.executed += 1,
            Outcome::Ignored(anomaly) => {
                log::debug!("ignored {:04X}: {}", op, anomaly);
                match anomaly {
                    Anomaly::StackOverflow => self.stack_overflows += 1,
                    Anomaly::StackUnderflow => self.stack_underflows += 1,
                    Anomaly::UnrecognizedSubopcode => self.unrecognized += 1,
                }
                self.last_ignored = Some((op, anomaly));
            }
            Outcome::Halted => {}
        }
    }

    pub fn ignored(&self) -> u64 {
        self.stack_overflows + self.stack_underflows + self.unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_executed() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.record(0x6000, Outcome::Executed);
        diagnostics.record(0x6100, Outcome::Executed);
        assert_eq!(diagnostics.executed, 2);
        assert_eq!(diagnostics.ignored(), 0);
        assert_eq!(diagnostics.last_ignored, None);
    }

    #[test]
    fn test_records_each_anomaly() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.record(0x2300, Outcome::Ignored(Anomaly::StackOverflow));
        diagnostics.record(0x00EE, Outcome::Ignored(Anomaly::StackUnderflow));
        diagnostics.record(0x8008, Outcome::Ignored(Anomaly::UnrecognizedSubopcode));
        assert_eq!(diagnostics.stack_overflows, 1);
        assert_eq!(diagnostics.stack_underflows, 1);
        assert_eq!(diagnostics.unrecognized, 1);
        assert_eq!(diagnostics.ignored(), 3);
        assert_eq!(
            diagnostics.last_ignored,
            Some((0x8008, Anomaly::UnrecognizedSubopcode))
        );
    }

    #[test]
    fn test_halted_is_not_counted() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.record(0x0000, Outcome::Halted);
        assert_eq!(diagnostics, Diagnostics::default());
    }
}
