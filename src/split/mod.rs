mod delimiter;
mod driver;

pub use delimiter::{Delimiter, Matching};
pub use driver::{SplitRuns, SplitRunsConsumer};

use std::sync::Arc;

use tracing::trace;

use crate::{Folder, Reducer};

/// Decides where runs start and how runs are stored.
///
/// A policy is shared by all accumulators of one reduction, which may run on
/// different threads at the same time. `starts_run` must therefore be a pure
/// function of the item.
pub trait RunPolicy<T>: Send + Sync {
    /// Container for the items of a single run.
    type Run: Extend<T> + Send;

    /// Container for the ordered list of runs.
    type Runs: Extend<Self::Run> + Send;

    /// Returns `true` if `item` starts a new run.
    fn starts_run(&self, item: &T) -> bool;

    /// Whether the item that starts a run is left out of it.
    fn exclude_trigger(&self) -> bool;

    /// Creates a new, empty run.
    fn new_run(&self) -> Self::Run;

    /// Creates a new, empty list of runs.
    fn new_runs(&self) -> Self::Runs;
}

/// [`RunPolicy`] built from a predicate and two container factories.
///
/// [`RunPolicy`]: trait.RunPolicy.html
#[derive(Clone)]
pub struct Rules<P, FI, FO> {
    predicate: P,
    exclude_trigger: bool,
    new_run: FI,
    new_runs: FO,
}

/// [`Rules`] that collect runs into `Vec<Vec<T>>`.
///
/// [`Rules`]: struct.Rules.html
pub type VecRules<T, P> = Rules<P, fn() -> Vec<T>, fn() -> Vec<Vec<T>>>;

impl<T, P> Rules<P, fn() -> Vec<T>, fn() -> Vec<Vec<T>>>
where
    P: Fn(&T) -> bool,
{
    /// Split at every item `predicate` matches and collect the runs into
    /// `Vec<Vec<T>>`.
    pub fn new(predicate: P, exclude_trigger: bool) -> Self {
        Self {
            predicate,
            exclude_trigger,
            new_run: Vec::new,
            new_runs: Vec::new,
        }
    }
}

impl<P, FI, K> Rules<P, FI, fn() -> Vec<K>>
where
    FI: Fn() -> K,
{
    /// Split at every item `predicate` matches, store each run in a container
    /// created by `new_run` and collect the runs into a `Vec`.
    pub fn with_run_factory(predicate: P, exclude_trigger: bool, new_run: FI) -> Self {
        Self {
            predicate,
            exclude_trigger,
            new_run,
            new_runs: Vec::new,
        }
    }
}

impl<P, FI, FO> Rules<P, FI, FO> {
    /// Split at every item `predicate` matches, using `new_run` and
    /// `new_runs` to create the run containers and the list of runs.
    pub fn with_factories(predicate: P, exclude_trigger: bool, new_run: FI, new_runs: FO) -> Self {
        Self {
            predicate,
            exclude_trigger,
            new_run,
            new_runs,
        }
    }
}

impl<T, P, FI, FO, K, L> RunPolicy<T> for Rules<P, FI, FO>
where
    P: Fn(&T) -> bool + Send + Sync,
    FI: Fn() -> K + Send + Sync,
    FO: Fn() -> L + Send + Sync,
    K: Extend<T> + Send,
    L: Extend<K> + Send,
{
    type Run = K;
    type Runs = L;

    fn starts_run(&self, item: &T) -> bool {
        (self.predicate)(item)
    }

    fn exclude_trigger(&self) -> bool {
        self.exclude_trigger
    }

    fn new_run(&self) -> K {
        (self.new_run)()
    }

    fn new_runs(&self) -> L {
        (self.new_runs)()
    }
}

/* RunAccumulator */

/// Partial result of splitting one contiguous range of the input into runs.
///
/// Items seen before the first run start are kept in a leading buffer: they
/// either continue the last run of an accumulator covering the preceding
/// range (see [`combine`]) or become a run of their own (see [`finish`]).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use runsplit::{RunAccumulator, Rules};
///
/// let rules = Arc::new(Rules::new(|x: &u32| x % 7 == 0, false));
///
/// let mut left = RunAccumulator::new(rules.clone());
/// left.extend(3..9);
///
/// let mut right = RunAccumulator::new(rules);
/// right.extend(9..15);
///
/// let runs = left.combine(right).finish();
///
/// assert_eq!(runs, vec![vec![3, 4, 5, 6], (7..14).collect(), vec![14]]);
/// ```
///
/// [`combine`]: #method.combine
/// [`finish`]: #method.finish
pub struct RunAccumulator<T, R>
where
    R: RunPolicy<T>,
{
    policy: Arc<R>,
    leading: Vec<T>,
    runs: Vec<R::Run>,
}

impl<T, R> RunAccumulator<T, R>
where
    R: RunPolicy<T>,
{
    /// Creates an empty accumulator.
    pub fn new(policy: Arc<R>) -> Self {
        Self {
            policy,
            leading: Vec::new(),
            runs: Vec::new(),
        }
    }

    /// `true` if no item has been pushed and no run has been opened.
    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.runs.is_empty()
    }

    /// Number of runs opened so far, not counting the leading items.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Feeds the next item of the range.
    pub fn push(&mut self, item: T) {
        if self.policy.starts_run(&item) {
            let mut run = self.policy.new_run();
            if !self.policy.exclude_trigger() {
                run.extend(Some(item));
            }

            self.runs.push(run);
        } else if let Some(run) = self.runs.last_mut() {
            run.extend(Some(item));
        } else {
            self.leading.push(item);
        }
    }

    /// Merges the accumulator of the range directly following this one.
    ///
    /// The leading items of `right` did not start a run, so they continue the
    /// last run of `self`. If `self` has not opened a run yet they stay
    /// leading items.
    pub fn combine(mut self, right: Self) -> Self {
        let RunAccumulator { leading, runs, .. } = right;

        trace!(
            left_runs = self.runs.len(),
            right_runs = runs.len(),
            carried = leading.len(),
            "combine partial runs"
        );

        match self.runs.last_mut() {
            Some(last) => last.extend(leading),
            None => self.leading.extend(leading),
        }

        self.runs.extend(runs);

        self
    }

    /// Produces the final list of runs. Leading items become the first run.
    pub fn finish(self) -> R::Runs {
        let RunAccumulator {
            policy,
            leading,
            runs,
        } = self;

        let mut result = policy.new_runs();

        if !leading.is_empty() {
            let mut run = policy.new_run();
            run.extend(leading);
            result.extend(Some(run));
        }

        result.extend(runs);

        result
    }
}

impl<T, R> Extend<T> for RunAccumulator<T, R>
where
    R: RunPolicy<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, R> Folder<T> for RunAccumulator<T, R>
where
    R: RunPolicy<T>,
{
    type Result = Self;

    fn consume(mut self, item: T) -> Self {
        self.push(item);

        self
    }

    fn consume_iter<I>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(iter);

        self
    }

    fn complete(self) -> Self {
        self
    }
}

/* RunReducer */

/// Reduces two partial results by [`RunAccumulator::combine`].
///
/// [`RunAccumulator::combine`]: struct.RunAccumulator.html#method.combine
#[derive(Debug, Default, Clone, Copy)]
pub struct RunReducer;

impl<T, R> Reducer<RunAccumulator<T, R>> for RunReducer
where
    R: RunPolicy<T>,
{
    fn reduce(self, left: RunAccumulator<T, R>, right: RunAccumulator<T, R>) -> RunAccumulator<T, R> {
        left.combine(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::{BTreeSet, LinkedList, VecDeque};

    use proptest::{prelude::*, sample::Index};

    fn divisible_by(divisor: u8, exclude: bool) -> Arc<VecRules<u8, impl Fn(&u8) -> bool + Send + Sync>> {
        Arc::new(Rules::new(move |x: &u8| x % divisor == 0, exclude))
    }

    fn scan<R>(policy: &Arc<R>, items: &[u8]) -> RunAccumulator<u8, R>
    where
        R: RunPolicy<u8>,
    {
        let mut acc = RunAccumulator::new(policy.clone());
        acc.extend(items.iter().copied());

        acc
    }

    #[test]
    fn splits_at_multiples_of_seven() {
        let rules = Arc::new(Rules::new(|x: &u32| x % 7 == 0, false));
        let mut acc = RunAccumulator::new(rules);
        acc.extend(0..28);

        assert_eq!(
            acc.finish(),
            vec![
                (0..7).collect::<Vec<_>>(),
                (7..14).collect(),
                (14..21).collect(),
                (21..28).collect(),
            ]
        );
    }

    #[test]
    fn leading_items_form_first_run() {
        let rules = Arc::new(Rules::new(|s: &&str| *s == "word", true));
        let mut acc = RunAccumulator::new(rules);
        acc.extend(vec!["word", "hello", "dude", "word", "x"]);

        assert_eq!(acc.finish(), vec![vec!["hello", "dude"], vec!["x"]]);

        let rules = Arc::new(Rules::new(|s: &&str| *s == "word", true));
        let mut acc = RunAccumulator::new(rules);
        acc.extend(vec!["intro", "word", "body"]);

        assert_eq!(acc.finish(), vec![vec!["intro"], vec!["body"]]);
    }

    #[test]
    fn empty_input_gives_no_runs() {
        let acc = scan(&divisible_by(2, false), &[]);

        assert!(acc.is_empty());
        assert_eq!(acc.run_count(), 0);
        assert!(acc.finish().is_empty());
    }

    #[test]
    fn no_match_gives_single_run() {
        let rules = Arc::new(Rules::new(|_: &&str| false, false));
        let mut acc = RunAccumulator::new(rules);
        acc.extend(vec!["a", "b", "c"]);

        assert_eq!(acc.run_count(), 0);
        assert_eq!(acc.finish(), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn excluded_triggers_leave_empty_runs() {
        let acc = scan(&divisible_by(1, true), &[1, 2, 3]);

        assert_eq!(acc.finish(), vec![Vec::<u8>::new(), Vec::new(), Vec::new()]);
    }

    #[test]
    fn combine_carries_leading_items_into_last_run() {
        let rules = divisible_by(5, false);

        let left = scan(&rules, &[5, 6]);
        let right = scan(&rules, &[7, 8, 10, 11]);

        assert_eq!(left.run_count(), 1);
        assert_eq!(right.run_count(), 1);
        assert_eq!(left.combine(right).finish(), vec![vec![5, 6, 7, 8], vec![10, 11]]);
    }

    #[test]
    fn combine_without_left_runs_keeps_leading_items() {
        let rules = divisible_by(5, true);

        let left = scan(&rules, &[1, 2]);
        let right = scan(&rules, &[3, 5, 6]);
        let merged = left.combine(right);

        assert_eq!(merged.run_count(), 1);
        assert_eq!(merged.finish(), vec![vec![1, 2, 3], vec![6]]);
    }

    #[test]
    fn combine_with_empty_accumulators() {
        let rules = divisible_by(3, false);

        let empty = scan(&rules, &[]);
        let full = scan(&rules, &[1, 3, 4]);
        let merged = empty.combine(full).combine(scan(&rules, &[]));

        assert_eq!(merged.finish(), vec![vec![1], vec![3, 4]]);
    }

    #[test]
    fn custom_containers() {
        let rules = Arc::new(Rules::with_factories(
            |c: &char| c.is_uppercase(),
            false,
            String::new,
            LinkedList::<String>::new,
        ));
        let mut acc = RunAccumulator::new(rules);
        acc.extend("helloWorldFooBar".chars());

        let runs: LinkedList<String> = acc.finish();
        let runs: Vec<_> = runs.into_iter().collect();

        assert_eq!(runs, vec!["hello", "World", "Foo", "Bar"]);

        let rules = Arc::new(Rules::with_run_factory(|x: &u8| *x == 0, true, BTreeSet::<u8>::new));
        let mut acc = RunAccumulator::new(rules);
        acc.extend(vec![3, 1, 3, 0, 2, 2, 0]);

        let expected: Vec<BTreeSet<u8>> = vec![
            vec![1, 3].into_iter().collect(),
            vec![2].into_iter().collect(),
            BTreeSet::new(),
        ];
        assert_eq!(acc.finish(), expected);

        let rules = Arc::new(Rules::with_run_factory(|x: &u8| *x > 100, false, VecDeque::<u8>::new));
        let mut acc = RunAccumulator::new(rules);
        acc.extend(vec![1, 200, 2]);

        assert_eq!(acc.finish(), vec![VecDeque::from(vec![1]), VecDeque::from(vec![200, 2])]);
    }

    #[test]
    fn folder_and_reducer() {
        let rules = divisible_by(4, false);

        let left = RunAccumulator::new(rules.clone()).consume_iter(vec![1, 4, 5]).complete();
        let right = RunAccumulator::new(rules).consume(6).consume(8).complete();

        let merged = RunReducer.reduce(left, right);

        assert_eq!(merged.finish(), vec![vec![1], vec![4, 5, 6], vec![8]]);
    }

    #[test]
    #[should_panic(expected = "unreadable item")]
    fn predicate_panic_escapes_push() {
        let rules = Arc::new(Rules::new(
            |x: &u8| {
                if *x == 3 {
                    panic!("unreadable item");
                }

                *x == 0
            },
            false,
        ));

        let mut acc = RunAccumulator::new(rules);
        acc.extend(0..10);
    }

    proptest! {
        #[test]
        fn sequential_scan_keeps_all_items(
            input in proptest::collection::vec(0u8..32, 0..64),
            divisor in 1u8..8,
            exclude in any::<bool>(),
        ) {
            let runs = scan(&divisible_by(divisor, exclude), &input).finish();

            let leading = input.iter().take_while(|x| *x % divisor != 0).count();
            let expected: Vec<u8> = input
                .iter()
                .copied()
                .filter(|x| !exclude || x % divisor != 0)
                .collect();
            let flattened: Vec<u8> = runs.iter().flatten().copied().collect();

            prop_assert_eq!(flattened, expected);

            let triggers = input.iter().filter(|x| *x % divisor == 0).count();
            let has_leading_run = leading > 0;
            prop_assert_eq!(runs.len(), triggers + has_leading_run as usize);

            if !exclude {
                for run in runs.iter().skip(has_leading_run as usize) {
                    prop_assert_eq!(run[0] % divisor, 0);
                }
            }
        }

        #[test]
        fn partitioning_does_not_change_result(
            input in proptest::collection::vec(0u8..32, 0..64),
            divisor in 1u8..8,
            exclude in any::<bool>(),
            cuts in proptest::collection::vec(any::<Index>(), 0..12),
        ) {
            let rules = divisible_by(divisor, exclude);
            let expected = scan(&rules, &input).finish();

            let mut cuts: Vec<usize> = cuts.iter().map(|cut| cut.index(input.len() + 1)).collect();
            cuts.sort_unstable();

            let mut start = 0;
            let mut merged = RunAccumulator::new(rules.clone());
            for cut in cuts.into_iter().chain(Some(input.len())) {
                merged = merged.combine(scan(&rules, &input[start..cut]));
                start = cut;
            }

            prop_assert_eq!(merged.finish(), expected);
        }

        #[test]
        fn combine_is_associative(
            input in proptest::collection::vec(0u8..32, 0..48),
            divisor in 1u8..8,
            exclude in any::<bool>(),
            first in any::<Index>(),
            second in any::<Index>(),
        ) {
            let rules = divisible_by(divisor, exclude);

            let mut cuts = [first.index(input.len() + 1), second.index(input.len() + 1)];
            cuts.sort_unstable();
            let (a, rest) = input.split_at(cuts[0]);
            let (b, c) = rest.split_at(cuts[1] - cuts[0]);

            let left_first = scan(&rules, a).combine(scan(&rules, b)).combine(scan(&rules, c));
            let right_first = scan(&rules, a).combine(scan(&rules, b).combine(scan(&rules, c)));

            prop_assert_eq!(left_first.finish(), right_first.finish());
        }
    }
}
