//! Modal Shell
//!
//! - `host`: platform seams (document resources, embedded frame, signals)
//! - `guard`: RAII guards over document resources
//! - `modal`: the shell tying one preview session to those resources

pub mod guard;
pub mod host;
pub mod modal;

pub use guard::{EscapeBinding, ModalGuard, ScrollLockGuard};
pub use host::{DetachedHost, DocumentHost, FrameHost, FrameRect, HostSignal, SignalQueue};
pub use modal::ModalShell;
