use std::{
    fmt,
    fs::File,
    io::{self, BufReader, Read},
    num::ParseIntError,
    path::Path,
};

use itertools::Itertools;
use tracing::warn;

use crate::alphabet::{parse_bases, Base, InvalidBase};

/// A tolerant matching query: count the offsets of `pattern` over `text` within `radius`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub text: Vec<Base>,
    pub pattern: Vec<Base>,
    pub radius: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input truncated, expected {0}")]
    Truncated(Field),

    #[error("invalid {field}: {source}")]
    InvalidNumber {
        field: Field,
        #[source]
        source: ParseIntError,
    },

    #[error("{} in {} at column {}", .0.base, .0.field, .0.column)]
    InvalidBase(Box<InvalidBaseAt>),

    #[error(
        "{} has length {}, but {} was declared",
        .0.field,
        .0.actual,
        .0.declared
    )]
    UnmatchedLength(Box<UnmatchedLength>),

    #[error("I/O error: {0}")]
    IO(#[from] Box<io::Error>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TextLen,
    PatternLen,
    Radius,
    Text,
    Pattern,
}

impl Field {
    const ALL: [Self; 5] = [
        Self::TextLen,
        Self::PatternLen,
        Self::Radius,
        Self::Text,
        Self::Pattern,
    ];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TextLen => "text length",
            Self::PatternLen => "pattern length",
            Self::Radius => "radius",
            Self::Text => "text",
            Self::Pattern => "pattern",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBaseAt {
    pub field: Field,
    pub column: usize,
    pub base: InvalidBase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnmatchedLength {
    pub field: Field,
    pub declared: usize,
    pub actual: usize,
}

#[inline]
pub fn read_file(path: &Path) -> Result<Query, Error> {
    let reader = BufReader::new(File::open(path).map_err(Box::new)?);
    read_query(reader)
}

/// Reads a query made of five whitespace separated tokens: the text length, the pattern length,
/// the radius, the text and the pattern.
///
/// Tokens after the pattern are ignored.
pub fn read_query<R>(mut reader: R) -> Result<Query, Error>
where
    R: Read,
{
    let mut content = String::new();
    reader.read_to_string(&mut content).map_err(Box::new)?;
    parse_query(&content)
}

fn parse_query(content: &str) -> Result<Query, Error> {
    let mut tokens = content.split_ascii_whitespace();
    let Some((text_len, pattern_len, radius, text, pattern)) = tokens.next_tuple() else {
        let found = content.split_ascii_whitespace().count();
        return Err(Error::Truncated(Field::ALL[found]));
    };

    let trailing = tokens.count();
    if trailing > 0 {
        warn!(trailing, "ignoring trailing tokens after the pattern");
    }

    let text_len = parse_number(text_len, Field::TextLen)?;
    let pattern_len = parse_number(pattern_len, Field::PatternLen)?;
    let radius = parse_number(radius, Field::Radius)?;
    let text = parse_sequence(text, Field::Text, text_len)?;
    let pattern = parse_sequence(pattern, Field::Pattern, pattern_len)?;

    Ok(Query {
        text,
        pattern,
        radius,
    })
}

fn parse_number(token: &str, field: Field) -> Result<usize, Error> {
    token
        .parse()
        .map_err(|source| Error::InvalidNumber { field, source })
}

fn parse_sequence(token: &str, field: Field, declared: usize) -> Result<Vec<Base>, Error> {
    let sequence = parse_bases(token).map_err(|(index, base)| {
        Error::InvalidBase(Box::new(InvalidBaseAt {
            field,
            column: index + 1,
            base,
        }))
    })?;

    if sequence.len() != declared {
        return Err(Error::UnmatchedLength(Box::new(UnmatchedLength {
            field,
            declared,
            actual: sequence.len(),
        })));
    }

    Ok(sequence)
}
