//! The session module drives the interactive loop: read an entry, rebuild
//! the whole accumulated program with it, keep the entry only if the build
//! succeeds, and print whatever output the fresh run added.

use crate::accumulator::{Accumulator, Submission};
use crate::builder::{BuildOutcome, BuildRunner};
use crate::editor::{LineEditor, ReadEvent};
use crate::error::Error;
use crate::log;
use crate::prompt::{Prompt, PromptSpec};
use crate::tracker::OutputTracker;

/// A raw line ending in this character flips multiline entry mode
const MULTILINE_TOGGLE: char = '`';

/// How a processed line ends the turn
#[derive(Debug, PartialEq, Eq)]
enum Turn {
    /// The entry stayed open for continuation lines; nothing gets printed
    Continued,
    /// The turn completed, revealing these output lines
    Finished(Vec<String>),
}

pub struct Repl<E> {
    editor: E,
    runner: BuildRunner,
    acc: Accumulator,
    lines: Vec<String>,
    tracker: OutputTracker,
    erred: bool,
    multiline: bool,
}

impl<E: LineEditor> Repl<E> {
    pub fn new(editor: E, runner: BuildRunner) -> Repl<E> {
        Repl {
            editor,
            runner,
            acc: Accumulator::new(),
            lines: Vec::new(),
            tracker: OutputTracker::new(),
            erred: false,
            multiline: false,
        }
    }

    /// Run until end-of-input. Failures are reported and the loop keeps
    /// going; only Ctrl-D leaves it.
    pub fn launch(mut self) -> Result<(), Error> {
        loop {
            let prompt = self.prompt();

            match self.editor.read_line(&prompt)? {
                ReadEvent::Eof => break,
                ReadEvent::Interrupted => {
                    // same as submitting nothing
                    println!();
                }
                ReadEvent::Line(raw) => match self.step(raw.trim_end()) {
                    Ok(Turn::Continued) => {}
                    Ok(Turn::Finished(shown)) => {
                        if !shown.is_empty() {
                            println!("{}", shown.join("\n"));
                        }
                        println!();
                    }
                    Err(e) => {
                        e.emit();
                        println!();
                    }
                },
            }
        }

        Ok(())
    }

    /// Prompt for the next read, reflecting the current session state
    fn prompt(&self) -> PromptSpec {
        Prompt::get(
            self.lines.len(),
            self.erred,
            self.acc.is_pending(),
            self.multiline,
        )
    }

    /// Process one raw line (already trimmed of trailing whitespace)
    fn step(&mut self, raw: &str) -> Result<Turn, Error> {
        if raw.ends_with(MULTILINE_TOGGLE) {
            self.multiline = !self.multiline;
            self.acc.discard_pending();
            return Ok(Turn::Finished(Vec::new()));
        }

        match self.acc.submit(raw) {
            Submission::Ignored => Ok(Turn::Finished(Vec::new())),
            Submission::Incomplete => Ok(Turn::Continued),
            Submission::Complete(entry) => self.commit(entry).map(Turn::Finished),
        }
    }

    /// Rebuild the whole program with the candidate entry appended. The
    /// entry stays accepted only if the compiler takes it.
    fn commit(&mut self, entry: String) -> Result<Vec<String>, Error> {
        self.lines.push(entry);

        let outcome = match self.runner.build_and_run(&self.lines) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.lines.pop();
                self.erred = true;
                return Err(e);
            }
        };

        match outcome {
            BuildOutcome::CompileFailed => {
                self.lines.pop();
                self.erred = true;
                Ok(Vec::new())
            }
            BuildOutcome::Ran { exit_code, output } => {
                log!(run, "exit code {exit_code}");
                self.erred = exit_code != 0;
                Ok(self.tracker.advance(&output).to_vec())
            }
        }
    }
}
