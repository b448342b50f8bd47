use std::ops::Not;

use tracing::trace;

use crate::{convolution::Convolver, Error, InvalidInput, PreconditionViolation, Sample};

/// Indicator of `symbol` over the pattern read backwards.
///
/// Convolving against the reversed indicator turns the convolution into a sliding dot product
/// of the pattern over the other sequence.
pub fn reversed_indicator<S>(pattern: &[S], symbol: &S) -> Vec<Sample>
where
    S: Eq,
{
    pattern
        .iter()
        .rev()
        .map(|s| if s == symbol { 1. } else { 0. })
        .collect()
}

/// Number of pattern positions holding `symbol` that fall on a covered position, for every
/// offset at which the pattern fits inside the coverage.
///
/// The output has length `coverage.len() - pattern.len() + 1`. The convolver must be planned for
/// `coverage.len()` and `pattern.len()`. Fails if the pattern is empty or longer than the
/// coverage.
pub fn correlate<S>(
    convolver: &mut Convolver<Sample>,
    coverage: &[Sample],
    pattern: &[S],
    symbol: &S,
) -> Result<Vec<i64>, Error>
where
    S: Eq,
{
    let pattern_len = pattern.len();
    if pattern_len == 0 {
        return Err(InvalidInput::EmptySequence.into());
    }
    if pattern_len > coverage.len() {
        return Err(PreconditionViolation::PatternTooLong {
            pattern_len,
            coverage_len: coverage.len(),
        }
        .into());
    }
    let shifts = coverage.len() - pattern_len + 1;

    let indicator = reversed_indicator(pattern, symbol);
    if indicator.iter().any(|&x| x != 0.).not() || coverage.iter().any(|&x| x != 0.).not() {
        trace!("symbol cannot contribute, skipping convolution");
        return Ok(vec![0; shifts]);
    }

    let convolution = convolver.convolve(coverage, &indicator)?;
    Ok(convolution
        .into_iter()
        .skip(pattern_len - 1)
        .take(shifts)
        .collect())
}
