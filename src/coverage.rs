use crate::Sample;

/// Marks every position within `radius` of a marked position.
///
/// Each marked position `i` is expanded into the window `[i - radius, i + radius]`, clipped to
/// `0..len`. The windows are accumulated in a difference array, which keeps the whole dilation
/// linear in `len` regardless of the radius.
///
/// The result contains `1.` for covered positions and `0.` otherwise.
pub fn dilate<I>(len: usize, radius: usize, marked: I) -> Vec<Sample>
where
    I: IntoIterator<Item = usize>,
{
    if len == 0 {
        return Vec::new();
    }

    let mut diff = vec![0i64; len + 1];
    for index in marked {
        debug_assert!(index < len);
        let start = index.saturating_sub(radius);
        let end = index.saturating_add(radius).min(len - 1);
        diff[start] += 1;
        diff[end + 1] -= 1;
    }

    diff.pop();
    diff.into_iter()
        .scan(0i64, |depth, delta| {
            *depth += delta;
            Some(if *depth > 0 { 1. } else { 0. })
        })
        .collect()
}

/// Coverage of `symbol` over `text`: positions with an occurrence of `symbol` within `radius`.
pub fn symbol_coverage<S>(text: &[S], symbol: &S, radius: usize) -> Vec<Sample>
where
    S: Eq,
{
    dilate(
        text.len(),
        radius,
        text.iter()
            .enumerate()
            .filter(|&(_, s)| s == symbol)
            .map(|(index, _)| index),
    )
}
