//! Unified sentiment dataset assembled from the train and test partitions.

mod assembler;

pub use assembler::{Dataset, DatasetError, Record, Split, assemble, load_dataset};
