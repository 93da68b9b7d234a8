use std::fmt;

/// An error that can occur when decoding a save
#[derive(Debug)]
pub struct Error(Box<ErrorInner>);

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    path: Vec<&'static str>,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(ErrorInner {
            kind,
            path: Vec::new(),
        }))
    }

    pub(crate) fn eof(offset: usize, needed: usize) -> Error {
        Error::new(ErrorKind::Eof { offset, needed })
    }

    pub(crate) fn invariant(violation: Violation, offset: usize) -> Error {
        Error::new(ErrorKind::Invariant { violation, offset })
    }

    /// Records that the error surfaced while decoding the given record.
    ///
    /// Called as the error unwinds, so the innermost record is pushed first.
    #[must_use]
    pub fn within(mut self, record: &'static str) -> Error {
        self.0.path.push(record);
        self
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &ErrorKind {
        &self.0.kind
    }

    /// Consume the error and return the specific type of error
    pub fn into_kind(self) -> ErrorKind {
        self.0.kind
    }

    /// Returns the byte offset that the error occurs (if available)
    pub fn offset(&self) -> Option<usize> {
        self.0.kind.offset()
    }

    /// The innermost record that was being decoded when the error occurred
    pub fn record(&self) -> Option<&'static str> {
        self.0.path.first().copied()
    }

    /// The chain of records from the root down to where the error occurred
    pub fn path(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.path.iter().rev().copied()
    }
}

/// Specific type of error
#[derive(Debug)]
pub enum ErrorKind {
    /// The save could not be read from disk
    Open(std::io::Error),

    /// A read requested more bytes than remain
    Eof { offset: usize, needed: usize },

    /// The save did not start with `VFSAVE`
    InvalidSignature { found: [u8; 6] },

    /// A record's version tag differs from the one this decoder understands
    VersionMismatch {
        record: &'static str,
        expected: i32,
        found: i32,
        offset: usize,
    },

    /// A structural rule of the format was broken
    Invariant { violation: Violation, offset: usize },
}

impl ErrorKind {
    pub fn offset(&self) -> Option<usize> {
        match *self {
            ErrorKind::Eof { offset, .. } => Some(offset),
            ErrorKind::InvalidSignature { .. } => Some(0),
            ErrorKind::VersionMismatch { offset, .. } => Some(offset),
            ErrorKind::Invariant { offset, .. } => Some(offset),
            ErrorKind::Open(_) => None,
        }
    }
}

/// The structural rule that a save broke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A length that sizes raw data was negative
    NegativeLength { field: &'static str, len: i32 },

    /// A count exceeded the maximum the format allows
    LimitExceeded {
        field: &'static str,
        limit: i32,
        found: i32,
    },

    /// A fixed marker value did not match
    Marker {
        field: &'static str,
        expected: i32,
        found: i32,
    },

    /// The stream length declared in the header disagrees with the input
    StreamLength { declared: i64, actual: usize },

    /// Bytes were left over after the game data
    TrailingData { remaining: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Violation::NegativeLength { field, len } => {
                write!(f, "negative length for {} ({})", field, len)
            }
            Violation::LimitExceeded {
                field,
                limit,
                found,
            } => write!(f, "{} count of {} exceeds limit of {}", field, found, limit),
            Violation::Marker {
                field,
                expected,
                found,
            } => write!(f, "{} marker expected {} but found {}", field, expected, found),
            Violation::StreamLength { declared, actual } => write!(
                f,
                "header declares a stream of {} bytes but input is {} bytes",
                declared, actual
            ),
            Violation::TrailingData { remaining } => {
                write!(f, "{} bytes remain after the game data", remaining)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.0.kind {
            ErrorKind::Open(ref err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0.kind {
            ErrorKind::Open(ref err) => write!(f, "unable to open save: {}", err)?,
            ErrorKind::Eof { offset, needed } => write!(
                f,
                "unexpected end of stream (needed {} bytes at offset {})",
                needed, offset
            )?,
            ErrorKind::InvalidSignature { ref found } => write!(
                f,
                "expected save to start with VFSAVE but found {}",
                String::from_utf8_lossy(found)
            )?,
            ErrorKind::VersionMismatch {
                record,
                expected,
                found,
                offset,
            } => write!(
                f,
                "unexpected {} version (expected: {}, found: {}, offset: {})",
                record, expected, found, offset
            )?,
            ErrorKind::Invariant {
                ref violation,
                offset,
            } => write!(f, "{} (offset: {})", violation, offset)?,
        }

        if !self.0.path.is_empty() {
            f.write_str(" in ")?;
            for (i, record) in self.path().enumerate() {
                if i != 0 {
                    f.write_str(" > ")?;
                }
                f.write_str(record)?;
            }
        }

        Ok(())
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(ErrorKind::Open(error))
    }
}
