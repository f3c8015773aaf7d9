//! Cooperative cancellation for catalog calls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{CatalogError, CatalogResult};

/// A cloneable cancellation signal.
///
/// Clones share the same flag. The catalog only checks the flag before an
/// operation starts; a store mutation in progress always runs to completion.
#[derive(Clone, Debug, Default)]
pub struct Cancellation {
    flag: Option<Arc<AtomicBool>>,
}

impl Cancellation {
    /// A fresh signal that can be cancelled.
    pub fn new() -> Self {
        Self {
            flag: Some(Arc::new(AtomicBool::new(false))),
        }
    }

    /// A signal that never fires.
    pub fn none() -> Self {
        Self { flag: None }
    }

    /// Request cancellation. No-op for [`Cancellation::none`].
    pub fn cancel(&self) {
        if let Some(flag) = &self.flag {
            flag.store(true, Ordering::Release);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Acquire))
    }

    /// `Err(Cancelled)` once [`cancel`](Self::cancel) has been called.
    pub fn check(&self) -> CatalogResult<()> {
        if self.is_cancelled() {
            Err(CatalogError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_signal_is_not_cancelled() {
        let c = Cancellation::new();
        assert!(!c.is_cancelled());
        assert!(c.check().is_ok());
    }

    #[test]
    fn clones_share_state() {
        let c = Cancellation::new();
        let other = c.clone();
        other.cancel();
        assert!(c.is_cancelled());
        assert!(matches!(c.check(), Err(CatalogError::Cancelled)));
    }

    #[test]
    fn none_never_fires() {
        let c = Cancellation::none();
        c.cancel();
        assert!(!c.is_cancelled());
    }

    #[test]
    fn default_is_none() {
        let c = Cancellation::default();
        c.cancel();
        assert!(!c.is_cancelled());
    }
}
