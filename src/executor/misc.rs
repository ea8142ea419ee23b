use std::cmp;

use tracing::trace;

use crate::core::Setup;

/// Decides whether a producer of a given length is split once more.
///
/// Every split halves the remaining split budget; the budget is raised so
/// that no part has to exceed `max_len` items and no split produces parts
/// shorter than `min_len` items.
#[derive(Clone, Copy, Debug)]
pub struct Splitter {
    splits: usize,
    min: usize,
}

impl Splitter {
    #[inline]
    pub fn new(splits: usize, len: usize, min: Option<usize>, max: Option<usize>) -> Self {
        let mut splits = splits;

        if let Some(max) = max {
            let parts = (len / cmp::max(max, 1)).next_power_of_two();
            splits = cmp::max(splits, parts);
        }

        Self {
            splits,
            min: cmp::max(min.unwrap_or_default(), 1),
        }
    }

    /// Create the splitter for `setup`, falling back to `default_splits` if
    /// the setup does not set a split count.
    #[inline]
    pub fn from_setup(setup: &Setup, default_splits: usize, len: usize) -> Self {
        let splits = setup.splits.unwrap_or(default_splits);

        Self::new(splits, len, setup.min_len, setup.max_len)
    }

    #[inline]
    pub fn try_split(&mut self, len: usize) -> bool {
        if len / 2 >= self.min && self.splits > 1 {
            self.splits /= 2;

            trace!(len, splits = self.splits, "split producer");

            true
        } else {
            false
        }
    }
}
