//! Error type shared by decoding and assembly.
//!
//! Kept as a plain enum with hand-written `Display`/`Error` impls rather
//! than reaching for a derive macro, matching the rest of this codebase's
//! error style.

use std::fmt;

/// Where in the input a [`ParseError`] occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub line: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnknownKeyword { name: String },
    WrongScope { name: String },
    InvalidValue { name: String, piece: String },
    NotAList { name: String },
    MissingSection { name: String },
    UnresolvedAlso { name: String },
    AlsoCycle { path: Vec<String> },
    /// A scalar (non-append, non-`duplicate-ok`) keyword was set more than
    /// once in the same section.
    DuplicateKeyword { name: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub location: Location,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(file: impl Into<String>, line: u32, kind: ParseErrorKind) -> Self {
        ParseError { location: Location { file: file.into(), line }, kind }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnknownKeyword { name } => {
                write!(f, "{}: unknown keyword: {}", self.location, name)
            }
            ParseErrorKind::WrongScope { name } => {
                write!(f, "{}: keyword {}, not valid in this section", self.location, name)
            }
            ParseErrorKind::InvalidValue { name, piece } => {
                write!(f, "{}: keyword {}, invalid value: {}", self.location, name, piece)
            }
            ParseErrorKind::NotAList { name } => {
                write!(f, "{}: keyword {}, only a single value is permitted here", self.location, name)
            }
            ParseErrorKind::MissingSection { name } => {
                write!(f, "{}: also= refers to nonexistent section {}", self.location, name)
            }
            ParseErrorKind::UnresolvedAlso { name } => {
                write!(f, "{}: unresolved also= reference: {}", self.location, name)
            }
            ParseErrorKind::AlsoCycle { path } => {
                write!(f, "{}: also= cycle: {}", self.location, path.join(" -> "))
            }
            ParseErrorKind::DuplicateKeyword { name } => {
                write!(f, "{}: keyword {}, already set (not duplicate-ok)", self.location, name)
            }
        }
    }
}

impl std::error::Error for ParseError {}
