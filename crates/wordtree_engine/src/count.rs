use serde_json::Value;
use wordtree_core::{count_words, CountOptions, DiagnosticSink, ResultNode};
use wordtree_logging::{wordtree_debug, wordtree_info};

use crate::convert::nodes_from_values;

/// Counts words in a batch of parsed JSON documents.
///
/// Returns one result per input value, in input order.
pub fn count_json_documents(
    values: &[Value],
    options: &CountOptions,
    sink: &mut dyn DiagnosticSink,
) -> Vec<ResultNode> {
    wordtree_info!("Counting words in {} documents", values.len());
    let nodes = nodes_from_values(values, sink);
    for (index, value) in values.iter().enumerate() {
        if let Some(title) = value.get("title").and_then(Value::as_str) {
            wordtree_debug!("document {} title={}", index, title);
        }
    }
    let results = count_words(&nodes, options, sink);
    wordtree_info!("Finished counting words");
    results
}
