//! An interactive REPL front-end for clang++: typed entries accumulate into
//! a growing program body that is recompiled and rerun after every commit,
//! showing only the output the latest run added.

pub mod accumulator;
pub mod builder;
pub mod editor;
mod error;
pub mod log;
mod prompt;
mod session;
pub mod tracker;

pub use accumulator::{Accumulator, Submission};
pub use builder::{BuildOutcome, BuildRunner};
pub use editor::{LineEditor, ReadEvent, TermEditor};
pub use error::{ErrKind, Error};
pub use prompt::{Prompt, PromptSpec, PromptStyle};
pub use session::Repl;
pub use tracker::OutputTracker;
