//! Wordtree core: pure data model, tokenizer and shape-mirroring word counter.
mod diagnostic;
mod node;
mod tokenize;
mod traverse;

pub use diagnostic::{CollectingSink, Diagnostic, DiagnosticSink, PathSegment};
pub use node::{Node, ResultNode, WordCount};
pub use tokenize::count_string;
pub use traverse::{count_object_words, count_words, CountOptions, NullPolicy, DEFAULT_MAX_DEPTH};
