use crate::{count_string, Diagnostic, DiagnosticSink, Node, PathSegment, ResultNode};

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// What a null mapping value turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPolicy {
    /// The key is left out of the result mapping.
    #[default]
    Omit,
    /// The key maps to an empty word count.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountOptions {
    pub null_policy: NullPolicy,
    /// Nodes nested deeper than this become empty word counts.
    pub max_depth: usize,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            null_policy: NullPolicy::Omit,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Counts words in every document, returning one result per document in input order.
///
/// A null document yields an empty word count so positions line up with the input.
pub fn count_words(
    documents: &[Node],
    options: &CountOptions,
    sink: &mut dyn DiagnosticSink,
) -> Vec<ResultNode> {
    let mut walker = Walker::new(options, sink);
    documents
        .iter()
        .enumerate()
        .map(|(index, document)| {
            walker.path.push(Step::Index(index));
            let result = walker.visit(document).unwrap_or_else(ResultNode::empty_words);
            walker.path.pop();
            result
        })
        .collect()
}

/// Counts words in a single node. Returns `None` for [`Node::Null`].
pub fn count_object_words(
    node: &Node,
    options: &CountOptions,
    sink: &mut dyn DiagnosticSink,
) -> Option<ResultNode> {
    Walker::new(options, sink).visit(node)
}

#[derive(Clone, Copy)]
enum Step<'n> {
    Key(&'n str),
    Index(usize),
}

struct Walker<'a, 'n> {
    options: &'a CountOptions,
    sink: &'a mut dyn DiagnosticSink,
    path: Vec<Step<'n>>,
    depth: usize,
}

impl<'a, 'n> Walker<'a, 'n> {
    fn new(options: &'a CountOptions, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            options,
            sink,
            path: Vec::new(),
            depth: 0,
        }
    }

    fn visit(&mut self, node: &'n Node) -> Option<ResultNode> {
        // Nulls are left to the caller's null policy, even past the depth limit.
        if matches!(node, Node::Null) {
            return None;
        }
        if self.depth > self.options.max_depth {
            let diagnostic = Diagnostic::DepthLimitExceeded {
                path: self.owned_path(),
                limit: self.options.max_depth,
            };
            self.sink.report(diagnostic);
            return Some(ResultNode::empty_words());
        }

        match node {
            Node::Null => None,
            Node::Mapping(entries) => {
                let mut out = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    match self.descend(Step::Key(key), value) {
                        Some(result) => out.push((key.clone(), result)),
                        None if self.options.null_policy == NullPolicy::Placeholder => {
                            out.push((key.clone(), ResultNode::empty_words()));
                        }
                        None => {}
                    }
                }
                Some(ResultNode::Mapping(out))
            }
            Node::Sequence(items) => {
                let out = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        self.descend(Step::Index(index), item)
                            .unwrap_or_else(ResultNode::empty_words)
                    })
                    .collect();
                Some(ResultNode::Sequence(out))
            }
            Node::Text(text) => Some(ResultNode::Words(count_string(text))),
            Node::Integer(value) => Some(ResultNode::Words(count_string(&value.to_string()))),
            Node::Float(value) => Some(ResultNode::Words(count_string(&value.to_string()))),
            Node::Boolean(value) => Some(ResultNode::Words(count_string(if *value {
                "true"
            } else {
                "false"
            }))),
            Node::Unsupported(_) => {
                let diagnostic = Diagnostic::UnsupportedType {
                    path: self.owned_path(),
                    type_name: node.kind_name().to_owned(),
                };
                self.sink.report(diagnostic);
                Some(ResultNode::empty_words())
            }
        }
    }

    fn descend(&mut self, step: Step<'n>, node: &'n Node) -> Option<ResultNode> {
        self.path.push(step);
        self.depth += 1;
        let result = self.visit(node);
        self.depth -= 1;
        self.path.pop();
        result
    }

    fn owned_path(&self) -> Vec<PathSegment> {
        self.path
            .iter()
            .map(|step| match step {
                Step::Key(key) => PathSegment::Key((*key).to_owned()),
                Step::Index(index) => PathSegment::Index(*index),
            })
            .collect()
    }
}
