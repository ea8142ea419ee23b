mod misc;
#[cfg(feature = "rayon-executor")]
mod rayon;
mod sequential;
#[cfg(feature = "tokio-executor")]
mod tokio;

pub use sequential::Sequential as SequentialExecutor;

#[cfg(feature = "rayon-executor")]
pub use self::rayon::Rayon as RayonExecutor;
#[cfg(feature = "tokio-executor")]
pub use self::tokio::Tokio as TokioExecutor;

#[cfg(feature = "tokio-executor")]
pub type DefaultExecutor = TokioExecutor;

#[cfg(all(feature = "rayon-executor", not(feature = "tokio-executor")))]
pub type DefaultExecutor = RayonExecutor;

#[cfg(not(any(feature = "rayon-executor", feature = "tokio-executor")))]
pub type DefaultExecutor = SequentialExecutor;
