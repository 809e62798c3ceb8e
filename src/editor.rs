//! The LineEditor trait lets the session loop read entries without knowing
//! anything about the terminal. The production implementation wraps
//! rustyline; tests substitute a scripted reader.

use std::borrow::Cow;

use colored::Colorize;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::{Highlighter, MatchingBracketHighlighter};
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Context, Editor, Helper};

use crate::accumulator;
use crate::error::{ErrKind, Error};
use crate::prompt::{PromptSpec, PromptStyle};

/// One read from the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    Line(String),
    /// Ctrl-C while editing
    Interrupted,
    /// Ctrl-D on an empty line
    Eof,
}

/// Minimal capability the session needs from a terminal
pub trait LineEditor {
    fn read_line(&mut self, prompt: &PromptSpec) -> Result<ReadEvent, Error>;
}

/// rustyline-backed editor with history, hints and bracket highlighting
pub struct TermEditor {
    rl: Editor<ReplHelper, DefaultHistory>,
}

impl TermEditor {
    pub fn new() -> Result<TermEditor, Error> {
        let config = Config::builder().auto_add_history(true).build();
        let mut rl = Editor::with_config(config)
            .map_err(|e| Error::new(ErrKind::Editor).with_msg(e.to_string()))?;
        rl.set_helper(Some(ReplHelper::new()));

        Ok(TermEditor { rl })
    }
}

impl LineEditor for TermEditor {
    fn read_line(&mut self, prompt: &PromptSpec) -> Result<ReadEvent, Error> {
        if let Some(helper) = self.rl.helper_mut() {
            helper.style = prompt.style;
            helper.multiline = prompt.multiline;
        }

        match self.rl.readline(&prompt.text) {
            Ok(line) => Ok(ReadEvent::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadEvent::Eof),
            Err(e) => Err(Error::new(ErrKind::Editor).with_msg(e.to_string())),
        }
    }
}

/// Styles the prompt, hints from history and holds multi-line entries open
/// while their braces stay unbalanced
struct ReplHelper {
    hinter: HistoryHinter,
    brackets: MatchingBracketHighlighter,
    style: PromptStyle,
    multiline: bool,
}

impl ReplHelper {
    fn new() -> ReplHelper {
        ReplHelper {
            hinter: HistoryHinter {},
            brackets: MatchingBracketHighlighter::new(),
            style: PromptStyle::Ready,
            multiline: false,
        }
    }
}

/// Should the editor keep reading instead of submitting `input`
fn holds_open(multiline: bool, input: &str) -> bool {
    multiline && accumulator::brace_balance(input) > 0
}

impl Completer for ReplHelper {
    type Candidate = String;
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ReplHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        match self.style {
            PromptStyle::Ready => Cow::Owned(prompt.bright_green().to_string()),
            PromptStyle::Failed => Cow::Owned(prompt.bright_red().to_string()),
            PromptStyle::Continuation => Cow::Borrowed(prompt),
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }

    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.brackets.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize, forced: bool) -> bool {
        self.brackets.highlight_char(line, pos, forced)
    }
}

impl Validator for ReplHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        if holds_open(self.multiline, ctx.input()) {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

impl Helper for ReplHelper {}
