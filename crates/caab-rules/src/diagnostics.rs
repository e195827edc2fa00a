//! Diagnostic sinks for data-corruption reports

use std::sync::{Mutex, PoisonError};

use caab_domain::{DiagnosticSink, ReferenceMismatch};

/// Sink that emits each diagnostic as a `tracing` warning
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn reference_mismatch(&self, mismatch: &ReferenceMismatch) {
        tracing::warn!(
            case_reference = mismatch.case_reference.as_deref().unwrap_or_default(),
            assessment = mismatch.assessment.as_deref().unwrap_or_default(),
            entity = %mismatch.entity,
            attribute = mismatch.attribute.as_deref().unwrap_or_default(),
            "{}",
            mismatch
        );
    }
}

/// Sink that keeps diagnostics in memory for later inspection
#[derive(Debug, Default)]
pub struct MemorySink {
    mismatches: Mutex<Vec<ReferenceMismatch>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every mismatch recorded so far
    pub fn mismatches(&self) -> Vec<ReferenceMismatch> {
        self.mismatches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of mismatches recorded
    pub fn len(&self) -> usize {
        self.mismatches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn reference_mismatch(&self, mismatch: &ReferenceMismatch) {
        tracing::debug!("Recording {}", mismatch);
        self.mismatches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(mismatch.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn mismatch(entity: &str) -> ReferenceMismatch {
        ReferenceMismatch {
            case_reference: Some("CASE1".to_string()),
            assessment: None,
            entity: entity.to_string(),
            attribute: None,
        }
    }

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.reference_mismatch(&mismatch("A"));
        sink.reference_mismatch(&mismatch("B"));

        let recorded = sink.mismatches();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].entity, "A");
        assert_eq!(recorded[1].entity, "B");
    }

    #[test]
    fn test_memory_sink_shared_across_threads() {
        let sink = Arc::new(MemorySink::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || sink.reference_mismatch(&mismatch(&i.to_string())))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.len(), 4);
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.reference_mismatch(&mismatch("A"));
    }
}
