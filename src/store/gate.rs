//! Per-store dispatch gate.
//!
//! Serialises whole dispatches (reduce, commit, notify) across threads while
//! letting the thread that holds the gate enter again, which is what happens
//! when a listener dispatches from inside a notification pass.

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};

/// Re-entrant mutual exclusion for dispatch, tracking the nesting depth.
#[derive(Default)]
pub(crate) struct DispatchGate {
    depth: ReentrantMutex<Cell<usize>>,
}

impl DispatchGate {
    /// Block until the gate is free or already held by this thread.
    pub(crate) fn enter(&self) -> GateGuard<'_> {
        let guard = self.depth.lock();
        guard.set(guard.get() + 1);
        GateGuard { guard }
    }
}

/// Held for the duration of one dispatch; releases one level on drop.
pub(crate) struct GateGuard<'a> {
    guard: ReentrantMutexGuard<'a, Cell<usize>>,
}

impl GateGuard<'_> {
    /// Nesting level of this dispatch on the current thread, 1 for the outermost.
    pub(crate) fn depth(&self) -> usize {
        self.guard.get()
    }
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.guard.set(self.guard.get() - 1);
    }
}

/// Raised while the store's reducer runs; cleared on drop, panics included.
pub(crate) struct ReducingFlag<'a>(&'a AtomicBool);

impl<'a> ReducingFlag<'a> {
    pub(crate) fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for ReducingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn same_thread_can_reenter() {
        let gate = DispatchGate::default();
        let outer = gate.enter();
        let inner = gate.enter();

        assert_eq!(inner.depth(), 2);
        drop(inner);
        assert_eq!(outer.depth(), 1);
    }

    #[test]
    fn gate_is_free_after_all_guards_drop() {
        let gate = DispatchGate::default();
        {
            let _outer = gate.enter();
            let _inner = gate.enter();
        }
        assert!(gate.depth.try_lock().is_some_and(|depth| depth.get() == 0));
    }

    #[test]
    fn other_threads_wait_for_release() {
        let gate = Arc::new(DispatchGate::default());
        let order = Arc::new(Mutex::new(Vec::new()));

        let guard = gate.enter();
        let handle = {
            let gate = Arc::clone(&gate);
            let order = Arc::clone(&order);
            thread::spawn(move || {
                let guard = gate.enter();
                order.lock().push(("second", guard.depth()));
            })
        };

        thread::sleep(Duration::from_millis(20));
        order.lock().push(("first", guard.depth()));
        drop(guard);
        handle.join().unwrap();

        assert_eq!(*order.lock(), vec![("first", 1), ("second", 1)]);
    }

    #[test]
    fn guard_released_on_panic() {
        let gate = DispatchGate::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = gate.enter();
            panic!("listener blew up");
        }));

        assert!(result.is_err());
        assert_eq!(gate.enter().depth(), 1);
    }

    #[test]
    fn reducing_flag_clears_on_panic() {
        let flag = AtomicBool::new(false);
        let result = std::panic::catch_unwind(|| {
            let _raised = ReducingFlag::raise(&flag);
            panic!("reducer blew up");
        });

        assert!(result.is_err());
        assert!(!flag.load(Ordering::SeqCst));
    }
}
