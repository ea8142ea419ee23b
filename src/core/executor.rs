use super::{Consumer, Producer, ProducerCallback, Reducer};

/// An executor decides how a [`Producer`] is fed into a [`Consumer`]:
/// whether and where the input is split into contiguous sub-ranges, on
/// which thread or task each sub-range is folded, and in which order the
/// partial results are reduced (always left before right).
///
/// `T1` is the type of the final result. `T2` is the type of the result
/// produced by the inner executor, which is turned into `T1` by
/// [`map`](Executor::map) once all partial results have been reduced.
///
/// [`Producer`]: trait.Producer.html
/// [`Consumer`]: trait.Consumer.html
pub trait Executor<'a, T1, T2 = ()>: Sized
where
    T1: Send + 'a,
    T2: Send + 'a,
{
    /// Result of the execution, e.g. `T1` itself or a future of `T1`.
    type Result: Send;

    /// Executor that produces the intermediate `T2`.
    type Inner: Executor<'a, T2>;

    /// Drive `producer` into `consumer`, splitting as the setup of both
    /// and the executor itself allow.
    fn exec<P, C, R>(self, producer: P, consumer: C) -> Self::Result
    where
        P: Producer + 'a,
        C: Consumer<P::Item, Result = T1, Reducer = R> + 'a,
        R: Reducer<T1> + Send + 'a;

    /// Get the executor to drive the intermediate step with.
    fn into_inner(self) -> Self::Inner;

    /// Turn the result of the inner executor into the final result.
    fn map<O>(inner: <Self::Inner as Executor<'a, T2>>::Result, operation: O) -> Self::Result
    where
        O: FnMut(T2) -> T1 + Send + 'a;
}

/// Callback that hands a producer over to an executor, together with the
/// consumer that should receive its items.
pub struct ExecutorCallback<E, C> {
    executor: E,
    consumer: C,
}

impl<E, C> ExecutorCallback<E, C> {
    pub fn new(executor: E, consumer: C) -> Self {
        Self { executor, consumer }
    }
}

impl<'a, E, D, C, I, R> ProducerCallback<'a, I> for ExecutorCallback<E, C>
where
    E: Executor<'a, D>,
    D: Send + 'a,
    C: Consumer<I, Result = D, Reducer = R> + 'a,
    R: Reducer<D> + Send + 'a,
{
    type Output = E::Result;

    fn callback<P>(self, producer: P) -> Self::Output
    where
        P: Producer<Item = I> + 'a,
    {
        self.executor.exec(producer, self.consumer)
    }
}
