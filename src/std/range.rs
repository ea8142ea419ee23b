use std::ops::Range;

use crate::{IntoParallelIterator, ParallelIterator, Producer, ProducerCallback, WithSetup};

/// Parallel iterator over a range of `usize`.
#[derive(Debug, Clone)]
pub struct Iter {
    range: Range<usize>,
}

impl<'a> IntoParallelIterator<'a> for Range<usize> {
    type Iter = Iter;
    type Item = usize;

    fn into_par_iter(self) -> Self::Iter {
        Iter { range: self }
    }
}

impl<'a> ParallelIterator<'a> for Iter {
    type Item = usize;

    fn with_producer<CB>(self, callback: CB) -> CB::Output
    where
        CB: ProducerCallback<'a, Self::Item>,
    {
        callback.callback(IterProducer { range: self.range })
    }

    fn len_hint(&self) -> usize {
        self.range.len()
    }
}

/* IterProducer */

struct IterProducer {
    range: Range<usize>,
}

impl WithSetup for IterProducer {}

impl Producer for IterProducer {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.range
    }

    fn len(&self) -> usize {
        self.range.len()
    }

    fn split_at(self, index: usize) -> (Self, Self) {
        let mid = self.range.start + index;

        (
            IterProducer {
                range: self.range.start..mid,
            },
            IterProducer {
                range: mid..self.range.end,
            },
        )
    }
}
