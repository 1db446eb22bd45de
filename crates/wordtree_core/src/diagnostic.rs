use std::fmt;

/// One step of a location inside a document batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Advisory report raised while walking documents. Never aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    UnsupportedType {
        path: Vec<PathSegment>,
        type_name: String,
    },
    ConversionFailure {
        path: Vec<PathSegment>,
        message: String,
    },
    DepthLimitExceeded {
        path: Vec<PathSegment>,
        limit: usize,
    },
    ContractViolation {
        path: Vec<PathSegment>,
        message: String,
    },
}

impl Diagnostic {
    pub fn path(&self) -> &[PathSegment] {
        match self {
            Diagnostic::UnsupportedType { path, .. }
            | Diagnostic::ConversionFailure { path, .. }
            | Diagnostic::DepthLimitExceeded { path, .. }
            | Diagnostic::ContractViolation { path, .. } => path,
        }
    }

    /// JSON-pointer rendering of the path, `""` for the root.
    pub fn pointer(&self) -> String {
        render_pointer(self.path())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = self.pointer();
        match self {
            Diagnostic::UnsupportedType { type_name, .. } => {
                write!(f, "unsupported type {type_name} at '{at}'")
            }
            Diagnostic::ConversionFailure { message, .. } => {
                write!(f, "conversion failure at '{at}': {message}")
            }
            Diagnostic::DepthLimitExceeded { limit, .. } => {
                write!(f, "depth limit {limit} exceeded at '{at}'")
            }
            Diagnostic::ContractViolation { message, .. } => {
                write!(f, "unexpected shape at '{at}': {message}")
            }
        }
    }
}

fn render_pointer(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in path {
        out.push('/');
        match segment {
            PathSegment::Key(key) => out.push_str(&key.replace('~', "~0").replace('/', "~1")),
            PathSegment::Index(index) => out.push_str(&index.to_string()),
        }
    }
    out
}

/// Receives diagnostics from the traversal and the JSON boundary.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Keeps every diagnostic in memory, in report order.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
