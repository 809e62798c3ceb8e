//! Every run restarts the compiled program from `main`, so its output always
//! contains everything previous runs already printed. The tracker keeps a
//! watermark of the lines the user has seen and only reveals the growth.

/// Watermark over the accumulated program output
#[derive(Debug, Default)]
pub struct OutputTracker {
    shown: usize,
}

impl OutputTracker {
    pub fn new() -> OutputTracker {
        OutputTracker::default()
    }

    /// Lines of `output` produced since the last run.
    ///
    /// `output` is the latest run's full output split on `\n`, trailing empty
    /// segment included. That final segment is withheld: it is either the
    /// artifact of a terminating newline or a partial line that a later run
    /// may still extend. The watermark never moves backwards, so a run that
    /// prints less than the previous one reveals nothing.
    pub fn advance<'o>(&mut self, output: &'o [String]) -> &'o [String] {
        if output.len() > self.shown + 1 {
            let fresh = &output[self.shown..output.len() - 1];
            self.shown = output.len() - 1;
            fresh
        } else {
            &[]
        }
    }

    /// Number of output lines already revealed
    pub fn shown(&self) -> usize {
        self.shown
    }
}
