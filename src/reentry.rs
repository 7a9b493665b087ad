//! Debug-only reentry detection for the hashed containers.
//!
//! Probing a bucket runs user code (`K: Hash + Eq`). If that code calls back
//! into the same container while its index is mid-mutation, the structure
//! can be observed in an inconsistent state. Each public entry point of the
//! hash core holds a [`ReentryGuard`] for its duration; entering twice
//! panics in debug builds and compiles to nothing in release builds.

use core::cell::Cell;
use core::marker::PhantomData;

/// Per-container reentry flag. `!Send + !Sync`, matching the crate's
/// single-threaded design.
#[derive(Debug, Default)]
pub(crate) struct ReentryFlag {
    #[cfg(debug_assertions)]
    entered: Cell<bool>,
    _single_thread: PhantomData<*mut ()>,
}

impl ReentryFlag {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            entered: Cell::new(false),
            _single_thread: PhantomData,
        }
    }

    /// Mark the container entered until the returned guard drops.
    #[inline]
    pub(crate) fn enter(&self) -> ReentryGuard<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.entered.replace(true),
                "container re-entered from key Hash/Eq during an operation"
            );
        }
        ReentryGuard { flag: self }
    }
}

pub(crate) struct ReentryGuard<'a> {
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    flag: &'a ReentryFlag,
}

impl Drop for ReentryGuard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.flag.entered.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::ReentryFlag;

    #[test]
    fn sequential_entry_is_fine() {
        let f = ReentryFlag::new();
        drop(f.enter());
        drop(f.enter());
    }

    #[cfg(debug_assertions)]
    #[test]
    fn nested_entry_panics_in_debug() {
        let f = ReentryFlag::new();
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _outer = f.enter();
            let _inner = f.enter();
        }));
        assert!(res.is_err(), "nested entry must panic in debug builds");
    }
}
