pub mod error;
pub mod heap;
pub mod order;

pub use error::HeapError;
pub use heap::{DrainSorted, Heap, MaxHeap, MinHeap, DEFAULT_CAPACITY};
pub use order::{Compare, MaxOrder, MinOrder};
