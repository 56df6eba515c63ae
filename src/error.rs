//! Crate-level error types.

use std::fmt;

use crate::sink::SinkError;

/// Errors produced by the molimport crate.
#[derive(Debug)]
pub enum ImportError {
    /// Generic I/O failure while reading a structure or data file.
    Io(std::io::Error),
    /// A PDB record could not be parsed.
    Parse {
        /// 1-based line number of the offending record.
        line: usize,
        /// What went wrong.
        message: String,
    },
    /// Element symbol columns 13-16 of an atom record match neither of the
    /// layouts the PDB format allows.
    MalformedElement {
        /// 1-based line number of the offending record.
        line: usize,
    },
    /// A custom element data file could not be parsed.
    ElementData {
        /// 1-based line number in the data file.
        line: usize,
        /// What went wrong.
        message: String,
    },
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The scene sink rejected an operation.
    Sink(SinkError),
}

impl ImportError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn element_data(
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::ElementData {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse { line, message } => {
                write!(f, "PDB parse error (line {line}): {message}")
            }
            Self::MalformedElement { line } => write!(
                f,
                "malformed element columns 13-16 in PDB record (line {line})"
            ),
            Self::ElementData { line, message } => {
                write!(f, "element data error (line {line}): {message}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Sink(e) => write!(f, "scene sink error: {e}"),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Sink(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<SinkError> for ImportError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}
