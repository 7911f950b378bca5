//! Scoped acquisition of document resources
//!
//! Each guard acquires in its constructor and releases in `Drop`, so the
//! release runs on every exit path: explicit close, the shell being
//! dropped, or a panic unwinding through the owner.

use std::rc::Rc;

use super::host::DocumentHost;

/// Page scroll is locked for as long as this lives
pub struct ScrollLockGuard {
    host: Rc<dyn DocumentHost>,
}

impl ScrollLockGuard {
    pub fn acquire(host: Rc<dyn DocumentHost>) -> Self {
        host.lock_scroll();
        Self { host }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.host.unlock_scroll();
    }
}

/// The escape-key listener is bound for as long as this lives
pub struct EscapeBinding {
    host: Rc<dyn DocumentHost>,
}

impl EscapeBinding {
    pub fn acquire(host: Rc<dyn DocumentHost>) -> Self {
        host.bind_escape();
        Self { host }
    }
}

impl Drop for EscapeBinding {
    fn drop(&mut self) {
        self.host.unbind_escape();
    }
}

/// Everything an open modal holds. Fields drop in declaration order:
/// the key listener goes first, then the scroll lock.
pub struct ModalGuard {
    _escape: EscapeBinding,
    _scroll: ScrollLockGuard,
}

impl ModalGuard {
    pub fn acquire(host: Rc<dyn DocumentHost>) -> Self {
        let scroll = ScrollLockGuard::acquire(host.clone());
        let escape = EscapeBinding::acquire(host);
        Self {
            _escape: escape,
            _scroll: scroll,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::DocumentHost;

    /// Records every host call in order
    #[derive(Default)]
    pub struct RecordingHost {
        pub calls: RefCell<Vec<&'static str>>,
    }

    impl RecordingHost {
        pub fn scroll_locked(&self) -> bool {
            self.balance("lock_scroll", "unlock_scroll") > 0
        }

        pub fn escape_bound(&self) -> bool {
            self.balance("bind_escape", "unbind_escape") > 0
        }

        fn balance(&self, acquire: &str, release: &str) -> i32 {
            self.calls.borrow().iter().fold(0, |n, call| {
                if *call == acquire {
                    n + 1
                } else if *call == release {
                    n - 1
                } else {
                    n
                }
            })
        }

        pub fn count(&self, call: &str) -> usize {
            self.calls.borrow().iter().filter(|c| **c == call).count()
        }
    }

    impl DocumentHost for RecordingHost {
        fn lock_scroll(&self) {
            self.calls.borrow_mut().push("lock_scroll");
        }
        fn unlock_scroll(&self) {
            self.calls.borrow_mut().push("unlock_scroll");
        }
        fn bind_escape(&self) {
            self.calls.borrow_mut().push("bind_escape");
        }
        fn unbind_escape(&self) {
            self.calls.borrow_mut().push("unbind_escape");
        }
    }
}
