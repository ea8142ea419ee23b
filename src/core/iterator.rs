use super::{Consumer, Executor, ExecutorCallback, ProducerCallback, Reducer};

use crate::split::{Rules, RunPolicy, SplitRuns, VecRules};

/// Parallel version of the standard iterator trait.
///
/// A parallel iterator knows the exact number of items it will produce
/// and can be split at any index, which is what allows an executor to
/// divide it into contiguous, order preserving sub-ranges.
pub trait ParallelIterator<'a>: Sized + Send {
    /// The type of item that this parallel iterator produces.
    type Item: Send + 'a;

    /// Internal method used to define the behavior of this parallel
    /// iterator. You should not need to call this directly.
    ///
    /// This method causes the iterator `self` to start producing
    /// items and to feed them to the consumer `consumer` one by one.
    /// The executor may split the consumer before doing so to create the
    /// opportunity to produce in parallel.
    fn drive<E, C, D, R>(self, executor: E, consumer: C) -> E::Result
    where
        E: Executor<'a, D>,
        C: Consumer<Self::Item, Result = D, Reducer = R> + 'a,
        D: Send + 'a,
        R: Reducer<D> + Send + 'a,
    {
        self.with_producer(ExecutorCallback::new(executor, consumer))
    }

    /// Internal method used to define the behavior of this parallel
    /// iterator. You should not need to call this directly.
    ///
    /// This method converts the iterator into a producer P and then
    /// invokes `callback.callback()` with P. Note that the type of
    /// this producer is not defined as part of the API, since
    /// `callback` must be defined generically for all producers. This
    /// allows the producer type to contain references.
    fn with_producer<CB>(self, callback: CB) -> CB::Output
    where
        CB: ProducerCallback<'a, Self::Item>;

    /// Produces an exact count of how many items this iterator will
    /// produce, presuming no panic occurs.
    fn len_hint(&self) -> usize;

    /// Splits the items of this iterator into contiguous runs. Every item
    /// for which `predicate` returns `true` starts a new run. Items before
    /// the first match form a leading run of their own.
    ///
    /// If `exclude_trigger` is set, the items that start a new run are
    /// dropped instead of becoming the first item of their run.
    ///
    /// # Examples
    ///
    /// ```
    /// use runsplit::*;
    ///
    /// let runs = (0..28usize)
    ///     .into_par_iter()
    ///     .split_runs(|x: &usize| x % 7 == 0, false)
    ///     .exec_with(SequentialExecutor::default());
    ///
    /// assert_eq!(runs.len(), 4);
    /// assert_eq!(runs[1], (7..14).collect::<Vec<_>>());
    /// ```
    fn split_runs<P>(self, predicate: P, exclude_trigger: bool) -> SplitRuns<Self, VecRules<Self::Item, P>>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync,
    {
        SplitRuns::new(self, Rules::new(predicate, exclude_trigger))
    }

    /// Same as [`split_runs`] but with a custom [`RunPolicy`], e.g.
    /// [`Rules`] with their own run containers or a [`Delimiter`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::VecDeque;
    ///
    /// use runsplit::*;
    ///
    /// let rules = Rules::with_run_factory(|x: &usize| x % 3 == 0, true, VecDeque::<usize>::new);
    /// let runs = (0..6usize)
    ///     .into_par_iter()
    ///     .split_runs_with(rules)
    ///     .exec_with(SequentialExecutor::default());
    ///
    /// assert_eq!(runs, vec![VecDeque::from(vec![1, 2]), VecDeque::from(vec![4, 5])]);
    /// ```
    ///
    /// [`split_runs`]: #method.split_runs
    /// [`RunPolicy`]: trait.RunPolicy.html
    /// [`Rules`]: struct.Rules.html
    /// [`Delimiter`]: struct.Delimiter.html
    fn split_runs_with<R>(self, policy: R) -> SplitRuns<Self, R>
    where
        R: RunPolicy<Self::Item>,
    {
        SplitRuns::new(self, policy)
    }
}
