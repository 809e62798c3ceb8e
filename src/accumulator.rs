//! The accumulator decides when typed input forms a complete entry. Physical
//! lines pile up in a pending buffer until the running brace balance closes,
//! at which point the whole entry is handed back for a build.

/// Outcome of feeding one physical line to the accumulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input. Nothing was buffered or counted
    Ignored,
    /// The entry still has open braces and needs continuation lines
    Incomplete,
    /// The entry is balanced and ready to compile
    Complete(String),
}

/// Pending entry buffer plus the session-wide brace balance.
///
/// The balance is lexical: every `{` and `}` counts, including ones inside
/// string literals or comments. It carries across commits and is never reset.
#[derive(Debug, Default)]
pub struct Accumulator {
    pending: String,
    brace_diff: i64,
}

impl Accumulator {
    pub fn new() -> Accumulator {
        Accumulator::default()
    }

    /// Feed one physical line, trimmed of trailing whitespace by the caller.
    /// A balanced entry moves out of the buffer as [`Submission::Complete`].
    pub fn submit(&mut self, raw: &str) -> Submission {
        if raw.is_empty() {
            return Submission::Ignored;
        }

        self.brace_diff += brace_balance(raw);

        if !self.pending.is_empty() {
            self.pending.push('\n');
        }
        self.pending.push_str(raw);

        if self.brace_diff > 0 {
            return Submission::Incomplete;
        }

        Submission::Complete(std::mem::take(&mut self.pending))
    }

    /// Is a multi-line entry currently in progress
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drop the pending text. The brace balance carries over; only the typed
    /// lines are forgotten.
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }
}

/// Open braces minus close braces in `input`
pub fn brace_balance(input: &str) -> i64 {
    let mut diff = 0;

    for c in input.chars() {
        match c {
            '{' => diff += 1,
            '}' => diff -= 1,
            _ => {}
        }
    }

    diff
}
