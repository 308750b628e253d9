use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_record(line: usize, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidRecord {
                line,
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn unsorted_input(line: usize, start: u32, previous: u32) -> Error {
        Error(
            ErrorKind::UnsortedInput {
                line,
                start,
                previous,
            }
            .into(),
        )
    }

    pub fn unknown_category(line: usize, value: impl Into<String>) -> Error {
        Error(
            ErrorKind::UnknownCategory {
                line,
                value: value.into(),
            }
            .into(),
        )
    }

    pub fn invariant_violation(table: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvariantViolation {
                table: table.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }

    /// Attaches a 1-based input line number to an error raised while the line
    /// number was not yet known. Errors that already carry one are unchanged.
    pub fn at_line(self, line: usize) -> Error {
        match self.into_kind() {
            ErrorKind::InvalidRecord { line: 0, message } => Error::invalid_record(line, message),
            ErrorKind::UnknownCategory { line: 0, value } => Error::unknown_category(line, value),
            ErrorKind::InvalidArgument { name, message } => {
                Error::invalid_record(line, format!("{name}: {message}"))
            }
            kind => kind.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("malformed record at line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    #[error(
        "unsorted input at line {line}: record starts at {start:#06X}, \
         before the previous record start {previous:#06X}"
    )]
    UnsortedInput {
        line: usize,
        start: u32,
        previous: u32,
    },

    #[error("unknown general category '{value}' at line {line}")]
    UnknownCategory { line: usize, value: String },

    #[error("invariant violation in table '{table}': {message}")]
    InvariantViolation { table: String, message: String },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}
