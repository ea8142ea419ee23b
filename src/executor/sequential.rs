use crate::core::{Consumer, Executor, Folder, Producer, Reducer};

use super::misc::Splitter;

/// Executes everything on the calling thread.
///
/// Without an explicit split count or `max_len` the whole input is folded
/// into a single partial result. Otherwise the input is partitioned just like
/// the parallel executors would do it, and the partial results are reduced
/// one after the other.
#[derive(Default, Clone, Copy, Debug)]
pub struct Sequential;

impl<'a, T1, T2> Executor<'a, T1, T2> for Sequential
where
    T1: Send + 'a,
    T2: Send + 'a,
{
    type Result = T1;
    type Inner = Sequential;

    fn exec<P, C, R>(self, producer: P, consumer: C) -> Self::Result
    where
        P: Producer + 'a,
        C: Consumer<P::Item, Result = T1, Reducer = R> + 'a,
        R: Reducer<T1> + Send + 'a,
    {
        let setup = producer.setup().merge(consumer.setup());
        let splitter = Splitter::from_setup(&setup, 1, producer.len());

        exec(splitter, producer, consumer)
    }

    fn into_inner(self) -> Self::Inner {
        self
    }

    fn map<O>(inner: <Self::Inner as Executor<'a, T2>>::Result, mut operation: O) -> Self::Result
    where
        O: FnMut(T2) -> T1 + Send + 'a,
    {
        operation(inner)
    }
}

fn exec<P, C>(mut splitter: Splitter, producer: P, consumer: C) -> C::Result
where
    P: Producer,
    C: Consumer<P::Item>,
{
    let len = producer.len();

    if splitter.try_split(len) {
        let mid = len / 2;

        let (left_producer, right_producer) = producer.split_at(mid);
        let (left_consumer, right_consumer, reducer) = consumer.split_at(mid);

        let left = exec(splitter, left_producer, left_consumer);
        let right = exec(splitter, right_producer, right_consumer);

        reducer.reduce(left, right)
    } else {
        producer.fold_with(consumer.into_folder()).complete()
    }
}
