//! Loading/error bookkeeping shared by both stores.

use vinyl_core::FailureKind;

/// Transient, UI-facing status of a store's operations.
///
/// `in_flight` counts pending operations so overlapping calls keep
/// `is_loading()` true until the last one resolves. The error fields hold
/// whatever the most recently resolved failure reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationStatus {
    in_flight: usize,
    last_error: Option<String>,
    last_error_kind: Option<FailureKind>,
}

impl OperationStatus {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_error_kind(&self) -> Option<FailureKind> {
        self.last_error_kind
    }

    pub(crate) fn begin(&mut self) {
        self.in_flight += 1;
        self.clear_error();
    }

    pub(crate) fn succeed(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub(crate) fn fail(&mut self, kind: FailureKind, message: impl Into<String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.record_error(kind, message);
    }

    /// Record an error without touching the in-flight counter.
    pub(crate) fn record_error(&mut self, kind: FailureKind, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.last_error_kind = Some(kind);
    }

    pub(crate) fn clear_error(&mut self) {
        self.last_error = None;
        self.last_error_kind = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_operations() {
        let mut status = OperationStatus::default();
        assert!(!status.is_loading());

        status.begin();
        status.begin();
        assert!(status.is_loading());

        status.fail(FailureKind::Transport, "timed out");
        assert!(status.is_loading());
        assert_eq!(status.last_error(), Some("timed out"));

        status.succeed();
        assert!(!status.is_loading());
        // Error stays until the next operation starts
        assert_eq!(status.last_error_kind(), Some(FailureKind::Transport));

        status.begin();
        assert_eq!(status.last_error(), None);
        assert_eq!(status.last_error_kind(), None);
    }

    #[test]
    fn test_counter_never_underflows() {
        let mut status = OperationStatus::default();
        status.succeed();
        status.fail(FailureKind::Rejected, "no");
        assert!(!status.is_loading());
    }
}
