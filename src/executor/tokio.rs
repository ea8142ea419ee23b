use std::panic::resume_unwind;

use futures::{
    future::{BoxFuture, FutureExt},
    join,
};
use tokio::task::spawn;

use crate::core::{Consumer, Executor, Folder, Producer, Reducer};

use super::misc::Splitter;

/// Executes the sub-ranges as tokio tasks. The result is a future that has
/// to be awaited inside a tokio runtime.
///
/// Tasks are spawned onto the runtime, so the input and the policy must be
/// `'static`.
#[derive(Clone, Copy, Debug)]
pub struct Tokio {
    splits: usize,
}

impl Tokio {
    pub fn new(splits: usize) -> Self {
        Self { splits }
    }
}

impl Default for Tokio {
    fn default() -> Self {
        Self {
            splits: 2 * num_cpus::get(),
        }
    }
}

impl<T1, T2> Executor<'static, T1, T2> for Tokio
where
    T1: Send + 'static,
    T2: Send + 'static,
{
    type Result = BoxFuture<'static, T1>;
    type Inner = Tokio;

    fn exec<P, C, R>(self, producer: P, consumer: C) -> Self::Result
    where
        P: Producer + 'static,
        C: Consumer<P::Item, Result = T1, Reducer = R> + 'static,
        R: Reducer<T1> + Send + 'static,
    {
        let setup = producer.setup().merge(consumer.setup());
        let splitter = Splitter::from_setup(&setup, self.splits, producer.len());

        exec(splitter, producer, consumer)
    }

    fn into_inner(self) -> Self::Inner {
        self
    }

    fn map<O>(inner: <Self::Inner as Executor<'static, T2>>::Result, mut operation: O) -> Self::Result
    where
        O: FnMut(T2) -> T1 + Send + 'static,
    {
        async move { operation(inner.await) }.boxed()
    }
}

fn exec<P, C>(mut splitter: Splitter, producer: P, consumer: C) -> BoxFuture<'static, C::Result>
where
    P: Producer + 'static,
    C: Consumer<P::Item> + 'static,
    C::Reducer: Send + 'static,
{
    let len = producer.len();

    if splitter.try_split(len) {
        let mid = len / 2;

        let (left_producer, right_producer) = producer.split_at(mid);
        let (left_consumer, right_consumer, reducer) = consumer.split_at(mid);

        let left = run_as_task(exec(splitter, left_producer, left_consumer));
        let right = run_as_task(exec(splitter, right_producer, right_consumer));

        async move {
            let (left_result, right_result) = join!(left, right);

            reducer.reduce(left_result, right_result)
        }
        .boxed()
    } else {
        async move { producer.fold_with(consumer.into_folder()).complete() }.boxed()
    }
}

async fn run_as_task<T>(task: BoxFuture<'static, T>) -> T
where
    T: Send + 'static,
{
    match spawn(task).await {
        Ok(value) => value,
        Err(err) if err.is_panic() => resume_unwind(err.into_panic()),
        Err(err) => panic!("tokio runtime shut down before a split task finished: {}", err),
    }
}
