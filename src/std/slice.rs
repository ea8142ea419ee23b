use crate::{IntoParallelIterator, ParallelIterator, Producer, ProducerCallback, WithSetup};

impl<'a, T> IntoParallelIterator<'a> for &'a [T]
where
    T: Sync,
{
    type Iter = Iter<'a, T>;
    type Item = &'a T;

    fn into_par_iter(self) -> Self::Iter {
        Iter { slice: self }
    }
}

impl<'a, T> IntoParallelIterator<'a> for &'a Vec<T>
where
    T: Sync,
{
    type Iter = Iter<'a, T>;
    type Item = &'a T;

    fn into_par_iter(self) -> Self::Iter {
        Iter { slice: self }
    }
}

/* Iter */

/// Parallel iterator over shared references to the items of a slice.
#[derive(Debug)]
pub struct Iter<'a, T> {
    slice: &'a [T],
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { slice: self.slice }
    }
}

impl<'a, T> ParallelIterator<'a> for Iter<'a, T>
where
    T: Sync,
{
    type Item = &'a T;

    fn with_producer<CB>(self, callback: CB) -> CB::Output
    where
        CB: ProducerCallback<'a, Self::Item>,
    {
        callback.callback(IterProducer { slice: self.slice })
    }

    fn len_hint(&self) -> usize {
        self.slice.len()
    }
}

/* IterProducer */

struct IterProducer<'a, T> {
    slice: &'a [T],
}

impl<'a, T> WithSetup for IterProducer<'a, T> {}

impl<'a, T> Producer for IterProducer<'a, T>
where
    T: Sync,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }

    fn len(&self) -> usize {
        self.slice.len()
    }

    fn split_at(self, index: usize) -> (Self, Self) {
        let (left, right) = self.slice.split_at(index);

        (IterProducer { slice: left }, IterProducer { slice: right })
    }
}
