use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    convolution::Convolver, correlator::correlate, coverage::symbol_coverage, Error,
    InvalidInput, PreconditionViolation,
};

/// Longest supported text.
///
/// Convolution outputs never exceed the pattern length, and with double precision transforms
/// of at most `2 * MAX_TEXT_LEN` points the accumulated round-off stays far below `0.5`, so
/// rounding always recovers the exact counts.
pub const MAX_TEXT_LEN: usize = 1 << 26;

/// How alphabet symbols are processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// One symbol after the other, sharing the same FFT plans.
    #[default]
    Sequential,

    /// Symbols are handled concurrently on the rayon thread pool, then contributions are summed.
    Parallel,
}

/// Number of satisfied pattern positions for every offset of the pattern over the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTotals {
    totals: Vec<i64>,
    pattern_len: usize,
}

impl ShiftTotals {
    fn zeroed(shifts: usize, pattern_len: usize) -> Self {
        Self {
            totals: vec![0; shifts],
            pattern_len,
        }
    }

    fn accumulate(&mut self, contribution: &[i64]) {
        debug_assert_eq!(contribution.len(), self.totals.len());
        let pattern_len = self.pattern_len as i64;
        self.totals
            .iter_mut()
            .zip(contribution)
            .for_each(|(total, &x)| {
                *total += x;
                debug_assert!((0..=pattern_len).contains(&*total));
            });
    }

    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.totals
    }

    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    /// Offsets at which every pattern position is satisfied, in increasing order.
    pub fn full_match_offsets(&self) -> impl Iterator<Item = usize> + '_ {
        let pattern_len = self.pattern_len as i64;
        self.totals
            .iter()
            .enumerate()
            .filter(move |&(_, &total)| total == pattern_len)
            .map(|(offset, _)| offset)
    }

    pub fn count_full_matches(&self) -> usize {
        self.full_match_offsets().count()
    }
}

/// Computes the shift totals of `pattern` over `text` within `radius`.
///
/// Every symbol of `alphabet` is dilated over the text and correlated with the pattern, then
/// the per-symbol contributions are summed. Pattern symbols not in `alphabet` are never
/// satisfied, and every symbol must appear in `alphabet` at most once. When the pattern is longer than the text there are no offsets and no
/// convolution is performed.
pub fn shift_totals<S>(
    text: &[S],
    pattern: &[S],
    radius: usize,
    alphabet: &[S],
    execution: Execution,
) -> Result<ShiftTotals, Error>
where
    S: Eq + Sync,
{
    if alphabet.is_empty() {
        return Err(PreconditionViolation::EmptyAlphabet.into());
    }
    if let Some(index) =
        (1..alphabet.len()).find(|&index| alphabet[..index].contains(&alphabet[index]))
    {
        return Err(PreconditionViolation::DuplicateSymbol(index).into());
    }
    if pattern.is_empty() {
        return Err(InvalidInput::EmptySequence.into());
    }

    let text_len = text.len();
    let pattern_len = pattern.len();
    if pattern_len > text_len {
        debug!(text_len, pattern_len, "pattern longer than text, no offsets");
        return Ok(ShiftTotals::zeroed(0, pattern_len));
    }
    if text_len > MAX_TEXT_LEN {
        return Err(PreconditionViolation::SequenceTooLong {
            len: text_len,
            max: MAX_TEXT_LEN,
        }
        .into());
    }

    let shifts = text_len - pattern_len + 1;
    debug!(
        text_len,
        pattern_len,
        radius,
        symbols = alphabet.len(),
        ?execution,
        "computing shift totals"
    );

    let mut totals = ShiftTotals::zeroed(shifts, pattern_len);
    match execution {
        Execution::Sequential => {
            let mut convolver = Convolver::new(text_len, pattern_len)?;
            for (symbol_index, symbol) in alphabet.iter().enumerate() {
                trace!(symbol_index, "correlating symbol");
                let contribution =
                    symbol_contribution(&mut convolver, text, pattern, radius, symbol)?;
                totals.accumulate(&contribution);
            }
        }

        Execution::Parallel => {
            let contributions = alphabet
                .par_iter()
                .enumerate()
                .map(|(symbol_index, symbol)| {
                    trace!(symbol_index, "correlating symbol");
                    let mut convolver = Convolver::new(text_len, pattern_len)?;
                    symbol_contribution(&mut convolver, text, pattern, radius, symbol)
                })
                .collect::<Result<Vec<_>, Error>>()?;

            contributions
                .iter()
                .for_each(|contribution| totals.accumulate(contribution));
        }
    }

    Ok(totals)
}

/// Number of offsets at which every pattern symbol occurs in the text within `radius`.
///
/// Returns 0 when the pattern is longer than the text.
pub fn count_tolerant_matches<S>(
    text: &[S],
    pattern: &[S],
    radius: usize,
    alphabet: &[S],
) -> Result<usize, Error>
where
    S: Eq + Sync,
{
    shift_totals(text, pattern, radius, alphabet, Execution::Sequential)
        .map(|totals| totals.count_full_matches())
}

/// Offsets at which every pattern symbol occurs in the text within `radius`, in increasing order.
pub fn tolerant_match_offsets<S>(
    text: &[S],
    pattern: &[S],
    radius: usize,
    alphabet: &[S],
) -> Result<Vec<usize>, Error>
where
    S: Eq + Sync,
{
    shift_totals(text, pattern, radius, alphabet, Execution::Sequential)
        .map(|totals| totals.full_match_offsets().collect())
}

fn symbol_contribution<S>(
    convolver: &mut Convolver,
    text: &[S],
    pattern: &[S],
    radius: usize,
    symbol: &S,
) -> Result<Vec<i64>, Error>
where
    S: Eq,
{
    let coverage = symbol_coverage(text, symbol, radius);
    correlate(convolver, &coverage, pattern, symbol)
}
