use std::cmp::{max, min};

/// Gives access to the partitioning hints of a producer or consumer.
pub trait WithSetup {
    /// Setup to drive the iterator with.
    fn setup(&self) -> Setup {
        Setup::default()
    }
}

/// Partitioning hints an executor takes into account when it splits the
/// input into contiguous sub-ranges.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Setup {
    /// Number of splits/threads this iterator will use to proceed. If not
    /// set the executor picks its own default.
    pub splits: Option<usize>,

    /// The minimum number of items that we will process
    /// sequentially. Defaults to 1, which means that we will split
    /// all the way down to a single item.
    ///
    /// See [`SplitRuns::with_min_len`].
    ///
    /// [`SplitRuns::with_min_len`]: ../split/struct.SplitRuns.html#method.with_min_len
    pub min_len: Option<usize>,

    /// The maximum number of items that we will process
    /// sequentially. Lowering this forces the executor to create more
    /// (and smaller) partial results.
    ///
    /// See [`SplitRuns::with_max_len`].
    ///
    /// [`SplitRuns::with_max_len`]: ../split/struct.SplitRuns.html#method.with_max_len
    pub max_len: Option<usize>,
}

impl Setup {
    /// Merge two setups. Explicit split counts of `other` win, length
    /// limits are combined to the stricter value.
    pub fn merge(self, other: Self) -> Self {
        Self {
            splits: other.splits.or(self.splits),
            min_len: combine(self.min_len, other.min_len, max),
            max_len: combine(self.max_len, other.max_len, min),
        }
    }

    /// Whether any partitioning was requested explicitly.
    pub fn is_partitioned(&self) -> bool {
        self.splits.is_some() || self.max_len.is_some()
    }
}

fn combine<F>(a: Option<usize>, b: Option<usize>, f: F) -> Option<usize>
where
    F: FnOnce(usize, usize) -> usize,
{
    match (a, b) {
        (Some(a), Some(b)) => Some(f(a, b)),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_stricter_limits() {
        let producer = Setup {
            splits: Some(4),
            min_len: Some(2),
            max_len: Some(100),
        };
        let consumer = Setup {
            splits: None,
            min_len: Some(8),
            max_len: Some(10),
        };

        let merged = producer.merge(consumer);

        assert_eq!(merged.splits, Some(4));
        assert_eq!(merged.min_len, Some(8));
        assert_eq!(merged.max_len, Some(10));
        assert!(merged.is_partitioned());
    }

    #[test]
    fn default_is_not_partitioned() {
        let merged = Setup::default().merge(Setup {
            min_len: Some(3),
            ..Setup::default()
        });

        assert_eq!(merged.min_len, Some(3));
        assert!(!merged.is_partitioned());
    }
}
