#[cfg(feature = "default-executor")]
use crate::DefaultExecutor;
use crate::Executor;

/// A fully configured operation that only waits for an executor to run on.
pub trait Driver<'a, T1, T2 = ()>: Sized
where
    T1: Send + 'a,
    T2: Send + 'a,
{
    /// Run the operation on the given executor.
    fn exec_with<E>(self, executor: E) -> E::Result
    where
        E: Executor<'a, T1, T2>;

    /// Run the operation on the [`DefaultExecutor`].
    ///
    /// [`DefaultExecutor`]: type.DefaultExecutor.html
    #[cfg(feature = "default-executor")]
    fn exec(self) -> <DefaultExecutor as Executor<'a, T1, T2>>::Result
    where
        DefaultExecutor: Executor<'a, T1, T2>,
    {
        self.exec_with(DefaultExecutor::default())
    }
}
