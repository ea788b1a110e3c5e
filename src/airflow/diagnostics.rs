//! Injected diagnostics sink.
//!
//! The builder and the traversal driver never log through a process-wide
//! channel of their own; they report to whatever [`Diagnostics`] the caller
//! hands in. [`TracingDiagnostics`] forwards to `tracing`, while
//! [`CollectedDiagnostics`] keeps entries in memory.

use std::cell::RefCell;

use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticLevel {
    Info,
    Warning,
}

/// Kind of condition being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// A surface has no name and is left out of the network.
    MissingName,
    /// A surface shares its name with one already linked and is left out.
    DuplicateName,
    /// An interior surface references an adjacent surface that does not exist.
    UnresolvedAdjacency,
    /// Summary information about a finished build.
    Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub kind: DiagnosticKind,
    /// UID or name of the entity the diagnostic is about.
    pub subject: String,
    pub message: String,
}

/// Receiver of non-fatal build diagnostics.
///
/// Takes `&self` so the same sink can be shared by the driver and the
/// visitor it drives within one single-threaded build.
pub trait Diagnostics {
    fn report(&self, diagnostic: Diagnostic);

    fn warn(&self, kind: DiagnosticKind, subject: &str, message: String) {
        self.report(Diagnostic {
            level: DiagnosticLevel::Warning,
            kind,
            subject: subject.to_string(),
            message,
        });
    }

    fn info(&self, kind: DiagnosticKind, subject: &str, message: String) {
        self.report(Diagnostic {
            level: DiagnosticLevel::Info,
            kind,
            subject: subject.to_string(),
            message,
        });
    }
}

impl<T: Diagnostics + ?Sized> Diagnostics for &T {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

/// Forwards diagnostics to the `tracing` subscriber installed by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, d: Diagnostic) {
        match d.level {
            DiagnosticLevel::Info => info!(kind = ?d.kind, subject = %d.subject, "{}", d.message),
            DiagnosticLevel::Warning => {
                warn!(kind = ?d.kind, subject = %d.subject, "{}", d.message)
            }
        }
    }
}

/// Keeps every reported diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectedDiagnostics {
    entries: RefCell<Vec<Diagnostic>>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.entries
            .borrow()
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Warning)
            .cloned()
            .collect()
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|d| d.kind == kind)
            .count()
    }
}

impl Diagnostics for CollectedDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        self.entries.borrow_mut().push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collected_diagnostics() {
        let sink = CollectedDiagnostics::new();
        sink.warn(DiagnosticKind::MissingName, "uid-1", "no name".to_string());
        sink.info(DiagnosticKind::Summary, "network", "done".to_string());

        assert_eq!(sink.entries().len(), 2);
        assert_eq!(sink.warnings().len(), 1);
        assert_eq!(sink.warnings()[0].subject, "uid-1");
        assert_eq!(sink.count(DiagnosticKind::MissingName), 1);
        assert_eq!(sink.count(DiagnosticKind::UnresolvedAdjacency), 0);
    }

    fn report_missing(sink: impl Diagnostics) {
        sink.warn(DiagnosticKind::MissingName, "x", String::new());
    }

    #[test]
    fn test_reference_forwards() {
        let sink = CollectedDiagnostics::new();
        report_missing(&sink);
        assert_eq!(sink.entries().len(), 1);
    }

    #[test]
    fn test_tracing_diagnostics_does_not_panic_without_subscriber() {
        TracingDiagnostics.warn(DiagnosticKind::MissingName, "x", "message".to_string());
    }
}
