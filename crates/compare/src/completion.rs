use std::sync::{Arc, Condvar, Mutex, PoisonError};

/// Countdown barrier over a known number of units of work.
///
/// Every unit holds a clone and reports with [`WaitGroup::done`] exactly
/// once; [`WaitGroup::wait`] returns once the count reaches zero.
#[derive(Clone, Debug, Default)]
pub struct WaitGroup {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    pending: Mutex<usize>,
    drained: Condvar,
}

impl WaitGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `units` more units that must report before `wait` returns.
    pub fn add(&self, units: usize) {
        let mut pending = self.lock();
        *pending += units;
    }

    /// Reports one unit as finished.
    pub fn done(self) {
        let mut pending = self.lock();
        // Invariant: done is never called more often than add registered.
        debug_assert!(*pending > 0, "wait group count went negative");
        *pending = pending.saturating_sub(1);
        if *pending == 0 {
            self.inner.drained.notify_all();
        }
    }

    /// Blocks until every registered unit has reported.
    pub fn wait(&self) {
        let pending = self.lock();
        let _pending = self
            .inner
            .drained
            .wait_while(pending, |pending| *pending > 0)
            .unwrap_or_else(PoisonError::into_inner);
    }

    #[cfg(test)]
    fn pending(&self) -> usize {
        *self.lock()
    }

    // The guarded value is a plain counter, a poisoned lock still holds a
    // valid count.
    fn lock(&self) -> std::sync::MutexGuard<'_, usize> {
        self.inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Failure of the concurrent fan-in.
#[derive(Debug)]
pub enum CompletionError {
    /// The runtime refused to start another unit. Units that were already
    /// running have been drained.
    Spawn {
        spawned: usize,
        expected: usize,
        source: std::io::Error,
    },
    /// Some units finished without publishing their array.
    MissingResults { expected: usize, received: usize },
}

impl std::fmt::Display for CompletionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn {
                spawned, expected, ..
            } => write!(
                f,
                "cannot spawn sort unit: {spawned} of {expected} units started"
            ),
            Self::MissingResults { expected, received } => write!(
                f,
                "sort units published {received} of {expected} arrays"
            ),
        }
    }
}

impl std::error::Error for CompletionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            Self::MissingResults { .. } => None,
        }
    }
}
