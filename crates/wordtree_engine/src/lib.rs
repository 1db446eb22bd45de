//! Wordtree engine: JSON boundary, record pruning, logging and output files.
mod convert;
mod count;
mod diagnostics;
mod load;
mod output;
mod persist;
mod prune;

pub use convert::{node_from_value, nodes_from_values, value_from_result, value_from_words};
pub use count::count_json_documents;
pub use diagnostics::LogDiagnostics;
pub use load::{load_documents, parse_documents, LoadError};
pub use output::{render_results, write_results, OutputFormat};
pub use persist::{ensure_parent_dir, AtomicFileWriter, PersistError};
pub use prune::{prune_documents, PruneOptions};
