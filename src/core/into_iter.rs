use super::ParallelIterator;

/// `IntoParallelIterator` implements the conversion to a [`ParallelIterator`].
///
/// By implementing `IntoParallelIterator` for a type, you define how it will
/// transformed into an iterator. This is a parallel version of the standard
/// library's [`std::iter::IntoIterator`] trait.
///
/// [`ParallelIterator`]: trait.ParallelIterator.html
/// [`std::iter::IntoIterator`]: https://doc.rust-lang.org/std/iter/trait.IntoIterator.html
pub trait IntoParallelIterator<'a> {
    /// The parallel iterator type that will be created.
    type Iter: ParallelIterator<'a, Item = Self::Item>;

    /// The type of item that the parallel iterator will produce.
    type Item: Send + 'a;

    /// Converts `self` into a parallel iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use runsplit::*;
    ///
    /// let runs = vec!["a", "b", "#", "c"]
    ///     .into_par_iter()
    ///     .split_runs(|s: &&str| *s == "#", true)
    ///     .exec_with(SequentialExecutor::default());
    ///
    /// assert_eq!(runs, vec![vec!["a", "b"], vec!["c"]]);
    /// ```
    fn into_par_iter(self) -> Self::Iter;
}

/// `IntoParallelRefIterator` implements the conversion to a
/// [`ParallelIterator`], providing shared references to the data.
///
/// This is a parallel version of the `iter()` method
/// defined by various collections.
///
/// This trait is automatically implemented
/// `for I where &I: IntoParallelIterator`. In most cases, users
/// will want to implement [`IntoParallelIterator`] rather than implement
/// this trait directly.
///
/// [`ParallelIterator`]: trait.ParallelIterator.html
/// [`IntoParallelIterator`]: trait.IntoParallelIterator.html
pub trait IntoParallelRefIterator<'a> {
    /// The type of the parallel iterator that will be returned.
    type Iter: ParallelIterator<'a, Item = Self::Item>;

    /// The type of item that the parallel iterator will produce.
    /// This will typically be an `&'a T` reference type.
    type Item: Send + 'a;

    /// Converts `self` into a parallel iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use runsplit::*;
    ///
    /// let lines = vec!["[a]", "x=1", "[b]", "y=2", "z=3"];
    /// let sections = lines
    ///     .par_iter()
    ///     .split_runs(|line: &&&str| line.starts_with('['), false)
    ///     .exec_with(SequentialExecutor::default());
    ///
    /// assert_eq!(sections.len(), 2);
    /// assert_eq!(sections[1], vec![&"[b]", &"y=2", &"z=3"]);
    /// ```
    fn par_iter(&'a self) -> Self::Iter;
}

impl<'a, T> IntoParallelIterator<'a> for T
where
    T: ParallelIterator<'a>,
{
    type Iter = T;
    type Item = T::Item;

    fn into_par_iter(self) -> T {
        self
    }
}

impl<'a, I> IntoParallelRefIterator<'a> for I
where
    I: 'a + ?Sized,
    &'a I: IntoParallelIterator<'a>,
{
    type Iter = <&'a I as IntoParallelIterator<'a>>::Iter;
    type Item = <&'a I as IntoParallelIterator<'a>>::Item;

    fn par_iter(&'a self) -> Self::Iter {
        self.into_par_iter()
    }
}
