use wordtree_core::{Diagnostic, DiagnosticSink};
use wordtree_logging::wordtree_warn;

/// Forwards diagnostics to the log at warn level and counts them.
#[derive(Debug, Default)]
pub struct LogDiagnostics {
    reported: usize,
}

impl LogDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for LogDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported += 1;
        wordtree_warn!("{}", diagnostic);
    }
}
