//! The Error module contains helpful wrappers around possible errors in crepl.
//! They are used by the build runner as well as the session loop.

use std::fmt::{Display, Formatter};

use colored::Colorize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrKind {
    IO,
    Compiler,
    Program,
    Editor,
}

impl ErrKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrKind::IO => "i/o",
            ErrKind::Compiler => "compiler",
            ErrKind::Program => "program",
            ErrKind::Editor => "editor",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Error {
    kind: ErrKind,
    msg: Option<String>,
}

impl Error {
    pub fn new(kind: ErrKind) -> Error {
        Error { kind, msg: None }
    }

    pub fn with_msg(self, msg: String) -> Error {
        Error {
            msg: Some(msg),
            ..self
        }
    }

    pub fn emit(&self) {
        eprintln!("{}: {}", "error".black().on_yellow(), self);
    }
}

use std::convert::From;
use std::io;

/// I/O errors keep their messages
impl From<io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::new(ErrKind::IO).with_msg(e.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.kind.as_str())?;
        if let Some(msg) = &self.msg {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}
