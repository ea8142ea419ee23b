mod consumer;
mod driver;
mod executor;
mod folder;
mod into_iter;
mod iterator;
mod producer;
mod reducer;
mod setup;

pub use consumer::Consumer;
pub use driver::Driver;
pub use executor::{Executor, ExecutorCallback};
pub use folder::Folder;
pub use into_iter::{IntoParallelIterator, IntoParallelRefIterator};
pub use iterator::ParallelIterator;
pub use producer::{Producer, ProducerCallback};
pub use reducer::Reducer;
pub use setup::{Setup, WithSetup};
