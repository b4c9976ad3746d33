use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::error::SearchError;

/// Shared flag for aborting an in-flight search from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of every search holding a clone of this token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Bounds on a single shortest-path search.
///
/// All limits are optional; the default budget is unlimited. Limits are
/// checked once per frontier extraction.
#[derive(Debug, Clone, Default)]
pub struct SearchBudget {
    deadline: Option<Instant>,
    max_extractions: Option<usize>,
    cancel: Option<CancelToken>,
}

impl SearchBudget {
    /// Creates a budget with no limits.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Sets a wall-clock deadline for the search.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Caps the number of frontier extractions.
    #[must_use]
    pub fn with_max_extractions(mut self, max: usize) -> Self {
        self.max_extractions = Some(max);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Checks every limit against the current extraction count.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Aborted`] if any limit has been exceeded.
    pub fn check(&self, extractions: usize) -> Result<(), SearchError> {
        if let Some(token) = &self.cancel {
            if token.is_cancelled() {
                return Err(SearchError::Aborted {
                    reason: "cancelled",
                });
            }
        }
        if let Some(max) = self.max_extractions {
            if extractions >= max {
                return Err(SearchError::Aborted {
                    reason: "extraction limit reached",
                });
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(SearchError::Aborted {
                    reason: "deadline exceeded",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_budget_never_aborts() {
        let budget = SearchBudget::unlimited();
        assert!(budget.check(usize::MAX).is_ok());
    }

    #[test]
    fn extraction_cap_aborts_at_limit() {
        let budget = SearchBudget::unlimited().with_max_extractions(10);
        assert!(budget.check(9).is_ok());
        assert!(budget.check(10).is_err());
    }

    #[test]
    fn cancel_token_aborts_after_cancel() {
        let token = CancelToken::new();
        let budget = SearchBudget::unlimited().with_cancel_token(token.clone());
        assert!(budget.check(0).is_ok());

        token.cancel();
        assert!(budget.check(0).is_err());
    }

    #[test]
    fn elapsed_deadline_aborts() {
        let budget = SearchBudget::unlimited().with_deadline(Instant::now());
        assert!(budget.check(0).is_err());
    }
}
