use crate::utils::error::{CardGenError, Result};
use rand::seq::index;
use rand::Rng;

/// Draws `count` distinct values from `min..=max`, uniformly and in random order.
///
/// Asking for more values than the range holds is an invalid argument, not a
/// condition to retry.
pub fn sample_column<R: Rng + ?Sized>(rng: &mut R, min: u8, max: u8, count: usize) -> Result<Vec<u8>> {
    let width = range_width(min, max);
    if width == 0 || count > width {
        return Err(CardGenError::InvalidSample { min, max, count });
    }

    // index::sample 回傳的索引已是隨機順序
    let values = index::sample(rng, width, count)
        .into_iter()
        .map(|offset| min + offset as u8)
        .collect();

    Ok(values)
}

/// Number of values in `min..=max`, zero when the range is inverted.
pub fn range_width(min: u8, max: u8) -> usize {
    if min > max {
        0
    } else {
        usize::from(max - min) + 1
    }
}
