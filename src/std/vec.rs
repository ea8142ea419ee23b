use crate::{IntoParallelIterator, ParallelIterator, Producer, ProducerCallback, WithSetup};

/// Parallel iterator that moves out of a vector.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    vec: Vec<T>,
}

impl<'a, T> IntoParallelIterator<'a> for Vec<T>
where
    T: Send + 'a,
{
    type Iter = IntoIter<T>;
    type Item = T;

    fn into_par_iter(self) -> Self::Iter {
        IntoIter { vec: self }
    }
}

impl<'a, T> ParallelIterator<'a> for IntoIter<T>
where
    T: Send + 'a,
{
    type Item = T;

    fn with_producer<CB>(self, callback: CB) -> CB::Output
    where
        CB: ProducerCallback<'a, Self::Item>,
    {
        callback.callback(VecProducer { vec: self.vec })
    }

    fn len_hint(&self) -> usize {
        self.vec.len()
    }
}

/* VecProducer */

struct VecProducer<T> {
    vec: Vec<T>,
}

impl<T> WithSetup for VecProducer<T> {}

impl<T> Producer for VecProducer<T>
where
    T: Send,
{
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }

    fn len(&self) -> usize {
        self.vec.len()
    }

    fn split_at(mut self, index: usize) -> (Self, Self) {
        let right = self.vec.split_off(index);

        (self, VecProducer { vec: right })
    }
}
