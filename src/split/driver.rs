use std::sync::Arc;

use tracing::debug;

use crate::{Consumer, Driver, Executor, ParallelIterator, Setup, WithSetup};

use super::{RunAccumulator, RunPolicy, RunReducer};

/* SplitRuns */

/// Splits the items of a parallel iterator into runs.
///
/// Created by [`ParallelIterator::split_runs`] and
/// [`ParallelIterator::split_runs_with`]. Nothing happens until the driver is
/// executed.
///
/// [`ParallelIterator::split_runs`]: trait.ParallelIterator.html#method.split_runs
/// [`ParallelIterator::split_runs_with`]: trait.ParallelIterator.html#method.split_runs_with
pub struct SplitRuns<X, R> {
    iterator: X,
    policy: R,
    setup: Setup,
}

impl<X, R> SplitRuns<X, R> {
    /// Wraps `iterator` with the default setup, see
    /// [`ParallelIterator::split_runs_with`].
    ///
    /// [`ParallelIterator::split_runs_with`]: trait.ParallelIterator.html#method.split_runs_with
    pub fn new(iterator: X, policy: R) -> Self {
        Self {
            iterator,
            policy,
            setup: Setup::default(),
        }
    }

    /// Sets the number of splits the executor should aim for.
    pub fn with_splits(mut self, splits: usize) -> Self {
        self.setup.splits = Some(splits);

        self
    }

    /// Sets the minimum number of items folded into one partial result.
    pub fn with_min_len(mut self, min: usize) -> Self {
        self.setup.min_len = Some(min);

        self
    }

    /// Sets the maximum number of items folded into one partial result.
    ///
    /// # Examples
    ///
    /// ```
    /// use runsplit::*;
    ///
    /// let runs = (0..10usize)
    ///     .into_par_iter()
    ///     .split_runs(|x: &usize| x % 4 == 0, true)
    ///     .with_max_len(1)
    ///     .exec_with(SequentialExecutor::default());
    ///
    /// assert_eq!(runs, vec![vec![1, 2, 3], vec![5, 6, 7], vec![9]]);
    /// ```
    pub fn with_max_len(mut self, max: usize) -> Self {
        self.setup.max_len = Some(max);

        self
    }
}

impl<'a, X, R> Driver<'a, R::Runs, RunAccumulator<X::Item, R>> for SplitRuns<X, R>
where
    X: ParallelIterator<'a>,
    R: RunPolicy<X::Item> + 'a,
    R::Run: 'a,
    R::Runs: 'a,
{
    fn exec_with<E>(self, executor: E) -> E::Result
    where
        E: Executor<'a, R::Runs, RunAccumulator<X::Item, R>>,
    {
        let SplitRuns {
            iterator,
            policy,
            setup,
        } = self;

        debug!(len = iterator.len_hint(), ?setup, "split runs");

        let consumer = SplitRunsConsumer {
            policy: Arc::new(policy),
            setup,
        };
        let inner = iterator.drive(executor.into_inner(), consumer);

        E::map(inner, RunAccumulator::finish)
    }
}

/* SplitRunsConsumer */

/// Consumer that folds every sub-range of the input into a
/// [`RunAccumulator`].
///
/// [`RunAccumulator`]: struct.RunAccumulator.html
pub struct SplitRunsConsumer<R> {
    policy: Arc<R>,
    setup: Setup,
}

impl<R> WithSetup for SplitRunsConsumer<R> {
    fn setup(&self) -> Setup {
        self.setup.clone()
    }
}

impl<T, R> Consumer<T> for SplitRunsConsumer<R>
where
    T: Send,
    R: RunPolicy<T>,
{
    type Folder = RunAccumulator<T, R>;
    type Reducer = RunReducer;
    type Result = RunAccumulator<T, R>;

    fn split_at(self, _index: usize) -> (Self, Self, Self::Reducer) {
        let left = SplitRunsConsumer {
            policy: self.policy.clone(),
            setup: self.setup.clone(),
        };

        (left, self, RunReducer)
    }

    fn into_folder(self) -> Self::Folder {
        RunAccumulator::new(self.policy)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn expected() -> Vec<Vec<usize>> {
        vec![
            (0..7).collect(),
            (7..14).collect(),
            (14..21).collect(),
            (21..28).collect(),
        ]
    }

    #[test]
    fn sequential_without_partitioning() {
        let runs = (0..28usize)
            .into_par_iter()
            .split_runs(|x: &usize| x % 7 == 0, false)
            .exec_with(SequentialExecutor::default());

        assert_eq!(runs, expected());
    }

    #[test]
    fn sequential_with_partitioning() {
        for max in 1..30 {
            let runs = (0..28usize)
                .into_par_iter()
                .split_runs(|x: &usize| x % 7 == 0, false)
                .with_max_len(max)
                .exec_with(SequentialExecutor::default());

            assert_eq!(runs, expected(), "max_len = {}", max);
        }

        let runs = (0..28usize)
            .into_par_iter()
            .split_runs(|x: &usize| x % 7 == 0, false)
            .with_splits(5)
            .with_min_len(3)
            .exec_with(SequentialExecutor::default());

        assert_eq!(runs, expected());
    }

    #[test]
    fn split_owned_and_borrowed_strings() {
        let words: Vec<String> = vec!["word", "hello", "dude", "word", "x"]
            .into_iter()
            .map(String::from)
            .collect();

        let borrowed = words
            .par_iter()
            .split_runs(|s: &&String| s.as_str() == "word", true)
            .with_max_len(1)
            .exec_with(SequentialExecutor::default());

        assert_eq!(borrowed, vec![vec![&words[1], &words[2]], vec![&words[4]]]);

        let owned = words
            .clone()
            .into_par_iter()
            .split_runs(|s: &String| s == "word", true)
            .with_max_len(2)
            .exec_with(SequentialExecutor::default());

        assert_eq!(owned, vec![vec!["hello", "dude"], vec!["x"]]);
    }

    #[test]
    fn empty_input() {
        let runs = Vec::<u32>::new()
            .into_par_iter()
            .split_runs(|x: &u32| *x == 0, false)
            .with_max_len(1)
            .exec_with(SequentialExecutor::default());

        assert!(runs.is_empty());
    }

    #[test]
    fn delimiter_rules() {
        let input = vec![
            ":",
            "first",
            "subsequence",
            ": this is",
            "second",
            "subsequence",
            ":",
            "the",
            "last",
            "subsequence",
        ];

        let rules = Delimiter::prefix(":").unwrap().into_rules(true);
        let runs = input
            .into_par_iter()
            .split_runs_with(rules)
            .with_max_len(3)
            .exec_with(SequentialExecutor::default());

        assert_eq!(
            runs,
            vec![
                vec!["first", "subsequence"],
                vec!["second", "subsequence"],
                vec!["the", "last", "subsequence"],
            ]
        );
    }

    #[cfg(feature = "rayon-executor")]
    #[test]
    fn rayon_matches_sequential() {
        let input: Vec<u32> = (0..1000).map(|x| (x * 7919) % 113).collect();

        let sequential = input
            .par_iter()
            .split_runs(|x: &&u32| **x < 5, false)
            .exec_with(SequentialExecutor::default());

        for max in &[1, 3, 64, 1000] {
            let parallel = input
                .par_iter()
                .split_runs(|x: &&u32| **x < 5, false)
                .with_max_len(*max)
                .exec_with(RayonExecutor::default());

            assert_eq!(parallel, sequential);
        }
    }

    #[cfg(feature = "tokio-executor")]
    #[tokio::test(flavor = "multi_thread")]
    async fn tokio_matches_sequential() {
        let input: Vec<u32> = (0..1000).map(|x| (x * 7919) % 113).collect();

        let sequential = input
            .clone()
            .into_par_iter()
            .split_runs(|x: &u32| *x < 5, true)
            .exec_with(SequentialExecutor::default());

        let parallel = input
            .into_par_iter()
            .split_runs(|x: &u32| *x < 5, true)
            .with_max_len(16)
            .exec_with(TokioExecutor::default())
            .await;

        assert_eq!(parallel, sequential);
    }

    fn panics_at(value: usize) -> impl Fn(&usize) -> bool + Send + Sync + 'static {
        move |x: &usize| {
            if *x == value {
                panic!("predicate failed at {}", value);
            }

            x % 10 == 0
        }
    }

    #[test]
    #[should_panic(expected = "predicate failed at 7")]
    fn predicate_panic_escapes_sequential_executor() {
        (0..28usize)
            .into_par_iter()
            .split_runs(panics_at(7), false)
            .with_max_len(1)
            .exec_with(SequentialExecutor::default());
    }

    #[cfg(feature = "rayon-executor")]
    #[test]
    #[should_panic(expected = "predicate failed at 33")]
    fn predicate_panic_escapes_rayon_executor() {
        (0..100usize)
            .into_par_iter()
            .split_runs(panics_at(33), false)
            .with_max_len(4)
            .exec_with(RayonExecutor::default());
    }

    #[cfg(feature = "tokio-executor")]
    #[tokio::test(flavor = "multi_thread")]
    #[should_panic(expected = "predicate failed at 77")]
    async fn predicate_panic_escapes_tokio_executor() {
        (0..200usize)
            .into_par_iter()
            .split_runs(panics_at(77), false)
            .with_max_len(4)
            .exec_with(TokioExecutor::default())
            .await;
    }
}
