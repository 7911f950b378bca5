//! Preview Session
//!
//! Load lifecycle for one embedded external page. The session is a pure
//! reducer: events go in, commands for the IO layer come out. It never
//! touches the DOM.
//!
//! ```text
//!            open                 frame loaded
//!   Idle ───────────► Loading ─────────────────► Ready
//!    ▲                 │   ▲                       │
//!    │   frame failed  │   │ refresh / reconnect   │ refresh
//!    │   or timeout    ▼   │                       │
//!    │               Error ◄───────────────────────┘ (via Loading)
//!    │                 │
//!    └──── close ──────┴──── (from any state)
//! ```
//!
//! Every mount of the embedded context is tagged with the reload token
//! current at mount time. Callbacks carrying an older token belong to an
//! abandoned mount and are dropped.

/// Seconds a mount may stay in `Loading` before it counts as failed
pub const LOAD_TIMEOUT_SECS: f64 = 15.0;

/// Why the embedded page is not showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewFailure {
    /// The embedded context reported an error
    Rejected,
    /// No load signal within [`LOAD_TIMEOUT_SECS`]
    TimedOut,
}

/// Load phase. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreviewPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(PreviewFailure),
}

/// Inputs to the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewEvent {
    /// Modal requested open at time `now` (seconds)
    Open { now: f64 },
    /// Modal closed
    Close,
    /// Discard the embedded content and load it again
    Refresh { now: f64 },
    /// Flip fullscreen / windowed
    ToggleFullscreen,
    /// Embedded context mounted with `token` finished loading
    FrameLoaded { token: u64 },
    /// Embedded context mounted with `token` reported an error
    FrameFailed { token: u64 },
    /// Clock tick, drives the load timeout
    Tick { now: f64 },
    /// Leave the site for the target URL
    OpenExternally,
}

/// Outputs for the IO layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewCommand {
    /// Replace any mounted embedded context with a fresh one
    MountFrame { url: String, token: u64 },
    /// Remove the embedded context
    UnmountFrame,
    /// Navigate to the target outside the site
    NavigateExternal { url: String },
}

/// Transient state of one preview modal
#[derive(Debug, Clone)]
pub struct PreviewSession {
    url: String,
    open: bool,
    fullscreen: bool,
    phase: PreviewPhase,
    reload_token: u64,
    loading_since: Option<f64>,
}

impl PreviewSession {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            open: false,
            fullscreen: false,
            phase: PreviewPhase::Idle,
            reload_token: 0,
            loading_since: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn phase(&self) -> PreviewPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == PreviewPhase::Loading
    }

    pub fn has_error(&self) -> bool {
        matches!(self.phase, PreviewPhase::Error(_))
    }

    pub fn is_ready(&self) -> bool {
        self.phase == PreviewPhase::Ready
    }

    /// Token of the current mount; grows on every mount
    pub fn reload_token(&self) -> u64 {
        self.reload_token
    }

    /// Process one event
    pub fn handle_event(&mut self, event: PreviewEvent) -> Vec<PreviewCommand> {
        match event {
            PreviewEvent::Open { now } => {
                if self.open {
                    return Vec::new();
                }
                self.open = true;
                vec![self.begin_load(now)]
            }

            PreviewEvent::Close => {
                if !self.open {
                    return Vec::new();
                }
                self.open = false;
                self.fullscreen = false;
                self.phase = PreviewPhase::Idle;
                self.loading_since = None;
                vec![PreviewCommand::UnmountFrame]
            }

            PreviewEvent::Refresh { now } => {
                if !self.open {
                    return Vec::new();
                }
                vec![self.begin_load(now)]
            }

            PreviewEvent::ToggleFullscreen => {
                if self.open {
                    self.fullscreen = !self.fullscreen;
                }
                Vec::new()
            }

            PreviewEvent::FrameLoaded { token } => {
                if self.accepts(token) {
                    self.phase = PreviewPhase::Ready;
                    self.loading_since = None;
                }
                Vec::new()
            }

            PreviewEvent::FrameFailed { token } => {
                if self.accepts(token) {
                    self.settle_error(PreviewFailure::Rejected);
                }
                Vec::new()
            }

            PreviewEvent::Tick { now } => {
                if let Some(since) = self.loading_since {
                    if self.is_loading() && now - since >= LOAD_TIMEOUT_SECS {
                        tracing::debug!("preview {} timed out after {:.1}s", self.url, now - since);
                        self.settle_error(PreviewFailure::TimedOut);
                    }
                }
                Vec::new()
            }

            PreviewEvent::OpenExternally => {
                if !self.open {
                    return Vec::new();
                }
                vec![PreviewCommand::NavigateExternal {
                    url: self.url.clone(),
                }]
            }
        }
    }

    fn begin_load(&mut self, now: f64) -> PreviewCommand {
        self.reload_token += 1;
        self.phase = PreviewPhase::Loading;
        self.loading_since = Some(now);
        tracing::debug!("preview {} mounting (token {})", self.url, self.reload_token);
        PreviewCommand::MountFrame {
            url: self.url.clone(),
            token: self.reload_token,
        }
    }

    fn settle_error(&mut self, failure: PreviewFailure) {
        self.phase = PreviewPhase::Error(failure);
        self.loading_since = None;
    }

    /// Load callbacks only count for the current mount while it is loading
    fn accepts(&self, token: u64) -> bool {
        if token != self.reload_token {
            tracing::debug!(
                "preview {} dropped stale signal (token {} != {})",
                self.url,
                token,
                self.reload_token
            );
            return false;
        }
        self.open && self.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://studio.example.com";

    fn opened() -> PreviewSession {
        let mut session = PreviewSession::new(URL);
        session.handle_event(PreviewEvent::Open { now: 0.0 });
        session
    }

    fn assert_exclusive(session: &PreviewSession) {
        assert!(
            !(session.is_loading() && session.has_error()),
            "loading and error both set: {:?}",
            session.phase()
        );
    }

    #[test]
    fn test_open_starts_loading_and_mounts() {
        let mut session = PreviewSession::new(URL);
        assert_eq!(session.phase(), PreviewPhase::Idle);

        let commands = session.handle_event(PreviewEvent::Open { now: 1.0 });
        assert!(session.is_open());
        assert!(session.is_loading());
        assert_eq!(
            commands,
            vec![PreviewCommand::MountFrame {
                url: URL.to_string(),
                token: 1
            }]
        );
    }

    #[test]
    fn test_open_while_open_is_noop() {
        let mut session = opened();
        let token = session.reload_token();
        assert!(session
            .handle_event(PreviewEvent::Open { now: 2.0 })
            .is_empty());
        assert_eq!(session.reload_token(), token);
    }

    #[test]
    fn test_load_success_and_failure() {
        let mut session = opened();
        let token = session.reload_token();
        session.handle_event(PreviewEvent::FrameLoaded { token });
        assert!(session.is_ready());

        let mut session = opened();
        let token = session.reload_token();
        session.handle_event(PreviewEvent::FrameFailed { token });
        assert_eq!(
            session.phase(),
            PreviewPhase::Error(PreviewFailure::Rejected)
        );
    }

    #[test]
    fn test_reopen_always_starts_in_loading() {
        // From Ready
        let mut session = opened();
        let token = session.reload_token();
        session.handle_event(PreviewEvent::FrameLoaded { token });
        session.handle_event(PreviewEvent::Close);
        assert_eq!(session.phase(), PreviewPhase::Idle);
        session.handle_event(PreviewEvent::Open { now: 5.0 });
        assert!(session.is_loading());

        // From Error
        let token = session.reload_token();
        session.handle_event(PreviewEvent::FrameFailed { token });
        session.handle_event(PreviewEvent::Close);
        session.handle_event(PreviewEvent::Open { now: 9.0 });
        assert!(session.is_loading());
        assert!(!session.has_error());
    }

    #[test]
    fn test_refresh_strictly_increases_token() {
        let mut session = opened();
        let mut last = session.reload_token();
        for i in 0..25 {
            let commands = session.handle_event(PreviewEvent::Refresh { now: i as f64 });
            let token = session.reload_token();
            assert!(token > last);
            assert_eq!(
                commands,
                vec![PreviewCommand::MountFrame {
                    url: URL.to_string(),
                    token
                }]
            );
            last = token;
        }
    }

    #[test]
    fn test_refresh_from_ready_and_error_reenters_loading() {
        let mut session = opened();
        let token = session.reload_token();
        session.handle_event(PreviewEvent::FrameLoaded { token });
        session.handle_event(PreviewEvent::Refresh { now: 1.0 });
        assert!(session.is_loading());

        let token = session.reload_token();
        session.handle_event(PreviewEvent::FrameFailed { token });
        assert!(session.has_error());
        session.handle_event(PreviewEvent::Refresh { now: 2.0 });
        assert!(session.is_loading());
    }

    #[test]
    fn test_stale_signals_are_ignored() {
        let mut session = opened();
        let old = session.reload_token();
        session.handle_event(PreviewEvent::Refresh { now: 1.0 });

        session.handle_event(PreviewEvent::FrameFailed { token: old });
        assert!(session.is_loading());
        session.handle_event(PreviewEvent::FrameLoaded { token: old });
        assert!(session.is_loading());

        let current = session.reload_token();
        session.handle_event(PreviewEvent::FrameLoaded { token: current });
        assert!(session.is_ready());
    }

    #[test]
    fn test_signals_after_close_are_ignored() {
        let mut session = opened();
        let token = session.reload_token();
        session.handle_event(PreviewEvent::Close);
        session.handle_event(PreviewEvent::FrameLoaded { token });
        assert_eq!(session.phase(), PreviewPhase::Idle);
    }

    #[test]
    fn test_load_timeout() {
        let mut session = opened();
        session.handle_event(PreviewEvent::Tick { now: 14.9 });
        assert!(session.is_loading());
        session.handle_event(PreviewEvent::Tick { now: 15.0 });
        assert_eq!(
            session.phase(),
            PreviewPhase::Error(PreviewFailure::TimedOut)
        );

        // Timeout clock restarts with each mount
        session.handle_event(PreviewEvent::Refresh { now: 20.0 });
        session.handle_event(PreviewEvent::Tick { now: 30.0 });
        assert!(session.is_loading());
    }

    #[test]
    fn test_ticks_do_not_disturb_ready() {
        let mut session = opened();
        let token = session.reload_token();
        session.handle_event(PreviewEvent::FrameLoaded { token });
        session.handle_event(PreviewEvent::Tick { now: 1000.0 });
        assert!(session.is_ready());
    }

    #[test]
    fn test_close_unmounts_and_resets_fullscreen() {
        let mut session = opened();
        session.handle_event(PreviewEvent::ToggleFullscreen);
        assert!(session.is_fullscreen());

        let commands = session.handle_event(PreviewEvent::Close);
        assert_eq!(commands, vec![PreviewCommand::UnmountFrame]);
        assert!(!session.is_open());
        assert!(!session.is_fullscreen());

        assert!(session.handle_event(PreviewEvent::Close).is_empty());
    }

    #[test]
    fn test_fullscreen_is_orthogonal_to_load_state() {
        let mut session = opened();
        session.handle_event(PreviewEvent::ToggleFullscreen);
        assert!(session.is_loading());
        let token = session.reload_token();
        session.handle_event(PreviewEvent::FrameLoaded { token });
        session.handle_event(PreviewEvent::ToggleFullscreen);
        assert!(session.is_ready());
        assert!(!session.is_fullscreen());
    }

    #[test]
    fn test_open_externally_changes_nothing() {
        let mut session = opened();
        let token = session.reload_token();
        let commands = session.handle_event(PreviewEvent::OpenExternally);
        assert_eq!(
            commands,
            vec![PreviewCommand::NavigateExternal {
                url: URL.to_string()
            }]
        );
        assert!(session.is_loading());
        assert_eq!(session.reload_token(), token);
    }

    #[test]
    fn test_mutual_exclusion_across_event_sequence() {
        let mut session = PreviewSession::new(URL);
        let script = [
            PreviewEvent::Open { now: 0.0 },
            PreviewEvent::FrameFailed { token: 1 },
            PreviewEvent::Refresh { now: 1.0 },
            PreviewEvent::Tick { now: 20.0 },
            PreviewEvent::Refresh { now: 21.0 },
            PreviewEvent::FrameLoaded { token: 3 },
            PreviewEvent::FrameFailed { token: 3 },
            PreviewEvent::Close,
            PreviewEvent::Open { now: 30.0 },
            PreviewEvent::FrameFailed { token: 2 },
        ];
        for event in script {
            session.handle_event(event);
            assert_exclusive(&session);
        }
        assert!(session.is_loading());
    }
}
