//! Tolerant pattern matching over small alphabets through FFT-based correlation.
//!
//! A pattern matches the text at offset `l` when every pattern symbol `pattern[j]` has an
//! occurrence of the same symbol in the text within `radius` positions of `l + j`. Instead of
//! checking every offset against every pattern position, each alphabet symbol is handled with a
//! single convolution between its dilated text coverage and its reversed pattern indicator.

pub mod alphabet;
pub mod convolution;
pub mod correlator;
pub mod coverage;
pub mod input;
pub mod matcher;
pub mod polynomial;

pub use alphabet::{Base, InvalidBase};
pub use convolution::{convolve, Convolver, TransformFloat};
pub use matcher::{
    count_tolerant_matches, shift_totals, tolerant_match_offsets, Execution, ShiftTotals,
    MAX_TEXT_LEN,
};
pub use polynomial::{multiply_fast, multiply_naive};

/// The floating point type used for coverage and indicator sequences.
pub type Sample = f64;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("precondition violated: {0}")]
    PreconditionViolation(#[from] PreconditionViolation),

    #[error("FFTW error: {0}")]
    Fftw(#[from] fftw::error::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("unexpected empty sequence")]
    EmptySequence,

    #[error("sequence contains a non-finite value at index {0}")]
    NonFiniteValue(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionViolation {
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("alphabet symbol at index {0} is repeated")]
    DuplicateSymbol(usize),

    #[error("pattern length {pattern_len} exceeds the coverage length {coverage_len}")]
    PatternTooLong {
        pattern_len: usize,
        coverage_len: usize,
    },

    #[error("convolver planned for input lengths {expected:?}, got {actual:?}")]
    LengthMismatch {
        expected: [usize; 2],
        actual: [usize; 2],
    },

    #[error("text length {len} exceeds the maximum supported length {max}")]
    SequenceTooLong { len: usize, max: usize },

    #[error("convolution output at index {0} does not fit a 64-bit integer")]
    MagnitudeOverflow(usize),

    #[error("transform size {0} is not representable as a float")]
    UnrepresentableSize(usize),
}
