//! Line-oriented corpus files: raw text and label sequences.

mod loader;

pub use loader::{
    CorpusError, CorpusPaths, FallbackEncoding, RawCorpus, decode_text, load_corpus, load_lines,
    split_lines,
};
