mod range;
mod slice;
mod vec;

pub use range::Iter as RangeIter;
pub use slice::Iter as SliceIter;
pub use vec::IntoIter as VecIntoIter;
