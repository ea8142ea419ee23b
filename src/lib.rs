//! Order preserving run splitting on top of parallel iterators.
//!
//! A run split partitions an ordered sequence into contiguous runs. Every item
//! a predicate matches starts a new run; items before the first match form a
//! leading run. The split is computed as a parallel fold: the input is
//! partitioned into contiguous sub-ranges, every sub-range is scanned into a
//! [`RunAccumulator`], and neighbouring accumulators are combined left to
//! right. The result never depends on where the input was partitioned.
//!
//! # Example
//!
//! ```
//! use runsplit::*;
//!
//! let runs = (0..28usize)
//!     .into_par_iter()
//!     .split_runs(|x: &usize| x % 7 == 0, false)
//!     .with_max_len(4)
//!     .exec_with(SequentialExecutor::default());
//!
//! assert_eq!(runs[0], vec![0, 1, 2, 3, 4, 5, 6]);
//! assert_eq!(runs[3], vec![21, 22, 23, 24, 25, 26, 27]);
//! ```
//!
//! The accumulator can also be driven by hand:
//!
//! ```
//! use std::sync::Arc;
//!
//! use runsplit::*;
//!
//! let rules = Arc::new(Delimiter::equal("word")?.into_rules(true));
//! let mut acc = RunAccumulator::new(rules);
//! acc.extend(vec!["word", "hello", "dude", "word", "x"]);
//!
//! assert_eq!(acc.finish(), vec![vec!["hello", "dude"], vec!["x"]]);
//! # Ok::<(), Error>(())
//! ```
//!
//! # Features
//!
//! - `sequential-executor` (default): only the [`SequentialExecutor`].
//! - `rayon-executor`: adds `RayonExecutor`, backed by `rayon-core`.
//! - `tokio-executor`: adds `TokioExecutor`, which runs sub-ranges as tokio
//!   tasks and returns a future.
//!
//! [`DefaultExecutor`] is the tokio executor if enabled, otherwise the rayon
//! executor if enabled, otherwise the sequential one.

mod core;
mod error;
mod executor;
mod split;
mod std;

pub use self::core::{
    Consumer, Driver, Executor, ExecutorCallback, Folder, IntoParallelIterator,
    IntoParallelRefIterator, ParallelIterator, Producer, ProducerCallback, Reducer, Setup,
    WithSetup,
};
pub use self::error::Error;
#[cfg(feature = "rayon-executor")]
pub use self::executor::RayonExecutor;
#[cfg(feature = "tokio-executor")]
pub use self::executor::TokioExecutor;
pub use self::executor::{DefaultExecutor, SequentialExecutor};
pub use self::split::{
    Delimiter, Matching, RunAccumulator, RunPolicy, RunReducer, Rules, SplitRuns,
    SplitRunsConsumer, VecRules,
};
pub use self::std::{RangeIter, SliceIter, VecIntoIter};
