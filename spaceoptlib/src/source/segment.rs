//! Apartment segmentation.
//!
//! Apartment blocks in the flat number stream are delimited by sentinels:
//! any negative value ends the current block. The final block may run to
//! the end of the input without a sentinel.

use tracing::debug;

/// Whether `value` marks the end of an apartment block.
pub fn is_sentinel(value: f64) -> bool {
    value < 0.0
}

/// Index of the first sentinel at or after `start`, or `values.len()` if
/// there is none.
pub fn find_sentinel(values: &[f64], start: usize) -> usize {
    if start >= values.len() {
        return values.len();
    }
    values[start..]
        .iter()
        .position(|&v| is_sentinel(v))
        .map_or(values.len(), |offset| start + offset)
}

/// Split `values` into apartment slices, sentinels excluded.
///
/// # Example
///
/// ```rust
/// use spaceoptlib::segments;
///
/// let values = [1.0, 2.0, 101.0, 3.0, 4.0, -1.0, 2.0, 5.0, 1.0, 1.0, 1.0];
/// let blocks: Vec<&[f64]> = segments(&values).collect();
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[1][0], 2.0);
/// ```
pub fn segments(values: &[f64]) -> Segments<'_> {
    Segments { values, start: 0 }
}

/// Iterator over apartment slices. See [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    values: &'a [f64],
    start: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<Self::Item> {
        while self.start < self.values.len() {
            let start = self.start;
            let end = find_sentinel(self.values, start);
            self.start = end + 1;

            if end > start {
                return Some(&self.values[start..end]);
            }
            debug!(offset = start, "skipping empty apartment block");
        }
        None
    }
}
