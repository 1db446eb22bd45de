use serde_json::{Map, Number, Value};
use wordtree_core::{Diagnostic, DiagnosticSink, Node, PathSegment, ResultNode, WordCount};

/// Converts a batch of parsed JSON documents into nodes.
///
/// Diagnostic paths start with the document index. A document that cannot be
/// converted at all becomes [`Node::Null`] so positions are kept.
pub fn nodes_from_values(values: &[Value], sink: &mut dyn DiagnosticSink) -> Vec<Node> {
    let mut converter = Converter::new(sink);
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            converter.path.push(PathSegment::Index(index));
            let node = converter.convert(value).unwrap_or(Node::Null);
            converter.path.pop();
            node
        })
        .collect()
}

/// Converts one parsed JSON value into a node.
///
/// A number with no integer or float form is reported. Inside a mapping its
/// key is skipped; inside a sequence it becomes [`Node::Null`] so the
/// sequence keeps its length. With serde_json's default number
/// representation every number converts.
pub fn node_from_value(value: &Value, sink: &mut dyn DiagnosticSink) -> Option<Node> {
    Converter::new(sink).convert(value)
}

struct Converter<'a> {
    sink: &'a mut dyn DiagnosticSink,
    path: Vec<PathSegment>,
    number: fn(&Number) -> Option<Node>,
}

impl<'a> Converter<'a> {
    fn new(sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            sink,
            path: Vec::new(),
            number: number_node,
        }
    }

    fn convert(&mut self, value: &Value) -> Option<Node> {
        match value {
            Value::Null => Some(Node::Null),
            Value::Bool(b) => Some(Node::Boolean(*b)),
            Value::String(s) => Some(Node::Text(s.clone())),
            Value::Number(n) => {
                let node = (self.number)(n);
                if node.is_none() {
                    self.sink.report(Diagnostic::ConversionFailure {
                        path: self.path.clone(),
                        message: format!("number {n} has no integer or float form"),
                    });
                }
                node
            }
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    self.path.push(PathSegment::Index(index));
                    out.push(self.convert(item).unwrap_or(Node::Null));
                    self.path.pop();
                }
                Some(Node::Sequence(out))
            }
            Value::Object(entries) => {
                let mut out = Vec::with_capacity(entries.len());
                for (key, item) in entries {
                    self.path.push(PathSegment::Key(key.clone()));
                    if let Some(node) = self.convert(item) {
                        out.push((key.clone(), node));
                    }
                    self.path.pop();
                }
                Some(Node::Mapping(out))
            }
        }
    }
}

fn number_node(n: &Number) -> Option<Node> {
    if let Some(i) = n.as_i64() {
        Some(Node::Integer(i128::from(i)))
    } else if let Some(u) = n.as_u64() {
        Some(Node::Integer(i128::from(u)))
    } else {
        n.as_f64().map(Node::Float)
    }
}

/// Builds the JSON form of a result tree. Word counts become objects of integers.
pub fn value_from_result(result: &ResultNode) -> Value {
    match result {
        ResultNode::Mapping(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, child)| (key.clone(), value_from_result(child)))
                .collect::<Map<String, Value>>(),
        ),
        ResultNode::Sequence(items) => Value::Array(items.iter().map(value_from_result).collect()),
        ResultNode::Words(words) => value_from_words(words),
    }
}

pub fn value_from_words(words: &WordCount) -> Value {
    Value::Object(
        words
            .iter()
            .map(|(word, count)| (word.clone(), Value::from(*count)))
            .collect(),
    )
}
