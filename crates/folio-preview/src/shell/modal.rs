//! Modal Shell
//!
//! Hosts one [`PreviewSession`] and owns its global side effects. The
//! shell holds a [`ModalGuard`] exactly while the session is open; the
//! guard is re-derived from `session.is_open()` after every event, so the
//! two cannot drift apart.

use std::rc::Rc;

use super::guard::ModalGuard;
use super::host::DocumentHost;
use crate::preview::{PreviewCommand, PreviewEvent, PreviewSession, PreviewTarget};

pub struct ModalShell {
    target: PreviewTarget,
    session: PreviewSession,
    host: Rc<dyn DocumentHost>,
    guard: Option<ModalGuard>,
}

impl ModalShell {
    pub fn new(target: PreviewTarget, host: Rc<dyn DocumentHost>) -> Self {
        let session = PreviewSession::new(target.url.clone());
        Self {
            target,
            session,
            host,
            guard: None,
        }
    }

    pub fn target(&self) -> &PreviewTarget {
        &self.target
    }

    pub fn session(&self) -> &PreviewSession {
        &self.session
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    pub fn open(&mut self, now: f64) -> Vec<PreviewCommand> {
        self.dispatch(PreviewEvent::Open { now })
    }

    pub fn close(&mut self) -> Vec<PreviewCommand> {
        self.dispatch(PreviewEvent::Close)
    }

    pub fn refresh(&mut self, now: f64) -> Vec<PreviewCommand> {
        self.dispatch(PreviewEvent::Refresh { now })
    }

    pub fn toggle_fullscreen(&mut self) {
        self.dispatch(PreviewEvent::ToggleFullscreen);
    }

    /// Escape closes an open modal and is ignored otherwise
    pub fn escape_pressed(&mut self) -> Vec<PreviewCommand> {
        if !self.is_open() {
            return Vec::new();
        }
        self.close()
    }

    /// Feed an event to the session, then settle the guard
    pub fn dispatch(&mut self, event: PreviewEvent) -> Vec<PreviewCommand> {
        let commands = self.session.handle_event(event);

        match (self.session.is_open(), self.guard.is_some()) {
            (true, false) => {
                tracing::debug!("modal {} opened", self.target.slug);
                self.guard = Some(ModalGuard::acquire(self.host.clone()));
            }
            (false, true) => {
                tracing::debug!("modal {} closed", self.target.slug);
                self.guard = None;
            }
            _ => {}
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::guard::testing::RecordingHost;

    fn target() -> PreviewTarget {
        PreviewTarget {
            slug: "studio".to_string(),
            title: "Studio".to_string(),
            url: "https://studio.example.com".to_string(),
            snapshot_url: "/static/snapshots/studio.png".to_string(),
            accent: [99, 102, 241],
        }
    }

    fn shell() -> (ModalShell, Rc<RecordingHost>) {
        let host = Rc::new(RecordingHost::default());
        (ModalShell::new(target(), host.clone()), host)
    }

    #[test]
    fn test_open_locks_scroll_and_binds_escape_once() {
        let (mut shell, host) = shell();
        shell.open(0.0);
        shell.open(1.0);
        assert!(shell.is_open());
        assert!(host.scroll_locked());
        assert!(host.escape_bound());
        assert_eq!(host.count("lock_scroll"), 1);
        assert_eq!(host.count("bind_escape"), 1);
    }

    #[test]
    fn test_open_then_immediate_close_releases_lock() {
        let (mut shell, host) = shell();
        shell.open(0.0);
        let commands = shell.close();
        assert_eq!(commands, vec![PreviewCommand::UnmountFrame]);
        assert!(!host.scroll_locked());
        assert!(!host.escape_bound());
        assert_eq!(host.count("unlock_scroll"), 1);
    }

    #[test]
    fn test_dropping_open_shell_releases_lock() {
        let (mut shell, host) = shell();
        shell.open(0.0);
        drop(shell);
        assert!(!host.scroll_locked());
        assert!(!host.escape_bound());
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        let (mut shell, host) = shell();
        assert!(shell.escape_pressed().is_empty());
        assert!(host.calls.borrow().is_empty());

        shell.open(0.0);
        assert_eq!(shell.escape_pressed(), vec![PreviewCommand::UnmountFrame]);
        assert!(!shell.is_open());
        assert!(!host.scroll_locked());

        assert!(shell.escape_pressed().is_empty());
        assert_eq!(host.count("unlock_scroll"), 1);
    }

    #[test]
    fn test_reopen_cycles_pair_up() {
        let (mut shell, host) = shell();
        for i in 0..3 {
            shell.open(i as f64);
            assert!(shell.session().is_loading());
            shell.close();
        }
        assert_eq!(host.count("lock_scroll"), 3);
        assert_eq!(host.count("unlock_scroll"), 3);
        assert!(!host.scroll_locked());
    }

    #[test]
    fn test_fullscreen_and_refresh_keep_single_lock() {
        let (mut shell, host) = shell();
        shell.open(0.0);
        shell.toggle_fullscreen();
        shell.refresh(1.0);
        shell.refresh(2.0);
        assert!(shell.session().is_fullscreen());
        assert_eq!(host.count("lock_scroll"), 1);
        assert!(host.scroll_locked());
    }
}
