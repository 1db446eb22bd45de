use std::collections::btree_map;
use std::collections::BTreeMap;

/// One position in an input document, tagged by its dynamic type.
///
/// Mapping entries keep the insertion order of the source document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Mapping(Vec<(String, Node)>),
    Sequence(Vec<Node>),
    Text(String),
    Integer(i128),
    Float(f64),
    Boolean(bool),
    Null,
    /// A host value that matched none of the known kinds. Carries its type name.
    Unsupported(String),
}

impl Node {
    /// Short name of the node kind, used in diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
            Node::Text(_) => "text",
            Node::Integer(_) => "integer",
            Node::Float(_) => "float",
            Node::Boolean(_) => "boolean",
            Node::Null => "null",
            Node::Unsupported(type_name) => type_name,
        }
    }

    /// Looks up a mapping entry by key. Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Lowercase alphanumeric word -> occurrence count.
///
/// Keys are never empty and counts are always positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCount {
    counts: BTreeMap<String, u64>,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, word: &str) {
        debug_assert!(!word.is_empty());
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_owned(), 1);
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Adds every count of `other` into `self`.
    pub fn merge(&mut self, other: &WordCount) {
        for (word, count) in &other.counts {
            *self.counts.entry(word.clone()).or_insert(0) += count;
        }
    }

    /// Words in ascending lexical order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, u64> {
        self.counts.iter()
    }
}

impl<'a> IntoIterator for &'a WordCount {
    type Item = (&'a String, &'a u64);
    type IntoIter = btree_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Builds a count from literal pairs. Pairs with a zero count or an empty word are dropped.
impl<'a, const N: usize> From<[(&'a str, u64); N]> for WordCount {
    fn from(pairs: [(&'a str, u64); N]) -> Self {
        let mut words = WordCount::new();
        for (word, count) in pairs {
            if !word.is_empty() && count > 0 {
                *words.counts.entry(word.to_owned()).or_insert(0) += count;
            }
        }
        words
    }
}

/// Shape-mirroring output counterpart of a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultNode {
    Mapping(Vec<(String, ResultNode)>),
    Sequence(Vec<ResultNode>),
    Words(WordCount),
}

impl ResultNode {
    pub fn empty_words() -> Self {
        ResultNode::Words(WordCount::new())
    }

    pub fn as_words(&self) -> Option<&WordCount> {
        match self {
            ResultNode::Words(words) => Some(words),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ResultNode]> {
        match self {
            ResultNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a mapping entry by key. Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&ResultNode> {
        match self {
            ResultNode::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Keys of a mapping result in source order; empty for other shapes.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            ResultNode::Mapping(entries) => entries.iter().map(|(k, _)| k.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Merges every word count in the tree into a single count.
    pub fn flatten(&self) -> WordCount {
        let mut total = WordCount::new();
        self.flatten_into(&mut total);
        total
    }

    fn flatten_into(&self, total: &mut WordCount) {
        match self {
            ResultNode::Mapping(entries) => {
                for (_, child) in entries {
                    child.flatten_into(total);
                }
            }
            ResultNode::Sequence(items) => {
                for child in items {
                    child.flatten_into(total);
                }
            }
            ResultNode::Words(words) => total.merge(words),
        }
    }
}
