use rayon_core::{current_num_threads, join_context};

use crate::core::{Consumer, Executor, Folder, Producer, Reducer};

use super::misc::Splitter;

/// Executes the sub-ranges on the rayon thread pool.
#[derive(Clone, Copy, Debug)]
pub struct Rayon {
    splits: usize,
}

impl Rayon {
    pub fn new(splits: usize) -> Self {
        Self { splits }
    }
}

impl Default for Rayon {
    fn default() -> Self {
        Self {
            splits: current_num_threads(),
        }
    }
}

impl<'a, T1, T2> Executor<'a, T1, T2> for Rayon
where
    T1: Send + 'a,
    T2: Send + 'a,
{
    type Result = T1;
    type Inner = Rayon;

    fn exec<P, C, R>(self, producer: P, consumer: C) -> Self::Result
    where
        P: Producer + 'a,
        C: Consumer<P::Item, Result = T1, Reducer = R> + 'a,
        R: Reducer<T1> + Send + 'a,
    {
        let setup = producer.setup().merge(consumer.setup());
        let splitter = Splitter::from_setup(&setup, self.splits, producer.len());

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
    C::Reducer: Send,
{
    let len = producer.len();

    if splitter.try_split(len) {
        let mid = len / 2;

        let (left_producer, right_producer) = producer.split_at(mid);
        let (left_consumer, right_consumer, reducer) = consumer.split_at(mid);

        let (left_result, right_result) = join_context(
            |_| exec(splitter, left_producer, left_consumer),
            |_| exec(splitter, right_producer, right_consumer),
        );

        reducer.reduce(left_result, right_result)
    } else {
        producer.fold_with(consumer.into_folder()).complete()
    }
}
