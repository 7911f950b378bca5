//! Platform seams for the modal shell
//!
//! The shell never talks to the DOM directly. It goes through two traits:
//!
//! - [`DocumentHost`]: the document-wide resources a modal borrows while
//!   open (page scroll lock, the escape-key listener)
//! - [`FrameHost`]: the embedded browsing context showing the target page
//!
//! Anything the platform reports back (escape presses, frame load/error
//! callbacks) is queued as a [`HostSignal`] and drained by the app once
//! per frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Something the platform observed since the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    EscapePressed,
    FrameLoaded { token: u64 },
    FrameFailed { token: u64 },
}

/// Shared FIFO of platform signals. Single-threaded (browser main thread).
#[derive(Debug, Clone, Default)]
pub struct SignalQueue(Rc<RefCell<VecDeque<HostSignal>>>);

impl SignalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, signal: HostSignal) {
        self.0.borrow_mut().push_back(signal);
    }

    pub fn drain(&self) -> Vec<HostSignal> {
        self.0.borrow_mut().drain(..).collect()
    }
}

/// Document-level resources a modal holds while open.
///
/// Calls always come in pairs; use
/// [`ModalGuard`](super::guard::ModalGuard) rather than calling these
/// directly.
pub trait DocumentHost {
    fn lock_scroll(&self);
    fn unlock_scroll(&self);
    fn bind_escape(&self);
    fn unbind_escape(&self);
}

/// Screen-space rectangle in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// The embedded browsing context
pub trait FrameHost {
    /// Replace any mounted context with a fresh one for `url`. Load and
    /// error callbacks must report `token`.
    fn mount(&self, url: &str, token: u64);

    /// Remove the mounted context, if any
    fn unmount(&self);

    /// Position the context; `visible == false` keeps it loading behind
    /// the spinner
    fn place(&self, rect: FrameRect, visible: bool);
}

/// Host for targets without a DOM (native builds). Nothing is locked and
/// no frame is mounted, so previews settle through the load timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedHost;

impl DocumentHost for DetachedHost {
    fn lock_scroll(&self) {}
    fn unlock_scroll(&self) {}
    fn bind_escape(&self) {}
    fn unbind_escape(&self) {}
}

impl FrameHost for DetachedHost {
    fn mount(&self, url: &str, token: u64) {
        tracing::debug!("detached host: not mounting {} (token {})", url, token);
    }
    fn unmount(&self) {}
    fn place(&self, _rect: FrameRect, _visible: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_queue_is_fifo_and_shared() {
        let queue = SignalQueue::new();
        let producer = queue.clone();
        producer.push(HostSignal::EscapePressed);
        producer.push(HostSignal::FrameLoaded { token: 2 });

        assert_eq!(
            queue.drain(),
            vec![HostSignal::EscapePressed, HostSignal::FrameLoaded { token: 2 }]
        );
        assert!(queue.drain().is_empty());
    }
}
