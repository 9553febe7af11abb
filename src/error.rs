//! The Error module contains the error returned by every toolbox function. They all
//! fail the same way: one of their arguments was missing or out of its domain, and
//! nothing was touched before bailing out.

use std::fmt::{Display, Formatter};

use colored::Colorize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrKind {
    InvalidArgument,
}

impl ErrKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrKind::InvalidArgument => "invalid argument",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Error {
    kind: ErrKind,
    msg: Option<String>,
}

impl Error {
    pub fn new(kind: ErrKind) -> Error {
        Error { kind, msg: None }
    }

    /// Build the error returned when a precondition on the arguments does not hold.
    /// The rejection is logged so that it can be traced back to its call site
    pub fn invalid_argument(msg: &str) -> Error {
        log!("rejected arguments: {}", msg);

        Error::new(ErrKind::InvalidArgument).with_msg(String::from(msg))
    }

    pub fn with_msg(self, msg: String) -> Error {
        Error {
            msg: Some(msg),
            ..self
        }
    }

    /// What kind of error the error is
    pub fn kind(&self) -> ErrKind {
        self.kind
    }

    pub fn msg(&self) -> Option<&str> {
        self.msg.as_deref()
    }

    /// Display the error on stderr
    pub fn emit(&self) {
        match &self.msg {
            Some(msg) => eprintln!(
                "{}: {}: {}",
                "error".black().on_yellow(),
                self.kind.as_str().yellow(),
                msg
            ),
            None => eprintln!("{}: {}", "error".black().on_yellow(), self.kind.as_str()),
        }
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

pub type Result<T> = std::result::Result<T, Error>;
