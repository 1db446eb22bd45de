use serde_json::Value;
use wordtree_core::{Diagnostic, DiagnosticSink, PathSegment};

/// Record cleanup applied to issue exports before counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOptions {
    /// Keys removed from every record.
    pub drop_keys: Vec<String>,
    /// Keys whose value is replaced by its length.
    pub length_keys: Vec<String>,
}

impl Default for PruneOptions {
    fn default() -> Self {
        Self {
            drop_keys: ["url", "contract_signatures", "test_signatures", "tools"]
                .map(String::from)
                .to_vec(),
            length_keys: ["repos", "specification"].map(String::from).to_vec(),
        }
    }
}

/// Drops and summarises configured keys of every top-level record.
///
/// Records that are not JSON objects pass through unchanged with a diagnostic.
pub fn prune_documents(
    documents: Vec<Value>,
    options: &PruneOptions,
    sink: &mut dyn DiagnosticSink,
) -> Vec<Value> {
    documents
        .into_iter()
        .enumerate()
        .map(|(index, document)| prune_record(index, document, options, sink))
        .collect()
}

fn prune_record(
    index: usize,
    document: Value,
    options: &PruneOptions,
    sink: &mut dyn DiagnosticSink,
) -> Value {
    let mut record = match document {
        Value::Object(record) => record,
        other => {
            sink.report(Diagnostic::ContractViolation {
                path: vec![PathSegment::Index(index)],
                message: format!("expected a record object, found {}", kind_of(&other)),
            });
            return other;
        }
    };

    for key in &options.drop_keys {
        record.shift_remove(key);
    }
    for key in &options.length_keys {
        let Some(value) = record.get_mut(key) else {
            continue;
        };
        let len = match value {
            Value::Array(items) => items.len(),
            Value::Object(entries) => entries.len(),
            Value::String(text) => text.chars().count(),
            other => {
                let message = format!("cannot take the length of {}", kind_of(other));
                sink.report(Diagnostic::ContractViolation {
                    path: vec![PathSegment::Index(index), PathSegment::Key(key.clone())],
                    message,
                });
                continue;
            }
        };
        *value = Value::from(len);
    }
    Value::Object(record)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
