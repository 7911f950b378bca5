//! Showcase
//!
//! The set of project preview shells on the page and the single modal slot
//! they share. Opening one preview closes whichever other one is open, so
//! at most one modal holds the document resources at a time.

use std::rc::Rc;

use folio_types::ProjectSummary;

use crate::preview::{PreviewCommand, PreviewEvent, PreviewTarget};
use crate::shell::{DocumentHost, HostSignal, ModalShell};

/// Which modal is open. A single slot, so at most one can be.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    Preview { slug: String },
}

impl Modal {
    pub fn preview_slug(&self) -> Option<&str> {
        match self {
            Modal::Preview { slug } => Some(slug),
            Modal::None => None,
        }
    }
}

pub struct Showcase {
    shells: Vec<ModalShell>,
    modal: Modal,
    host: Rc<dyn DocumentHost>,
}

impl Showcase {
    pub fn new(projects: &[ProjectSummary], host: Rc<dyn DocumentHost>) -> Self {
        let mut showcase = Self {
            shells: Vec::new(),
            modal: Modal::None,
            host,
        };
        showcase.rebuild(projects);
        showcase
    }

    fn rebuild(&mut self, projects: &[ProjectSummary]) {
        self.shells = projects
            .iter()
            .map(|project| ModalShell::new(PreviewTarget::from(project), self.host.clone()))
            .collect();
    }

    /// Swap in a fresh catalog. Refused while a modal is open.
    pub fn replace_projects(&mut self, projects: &[ProjectSummary]) -> bool {
        if self.modal != Modal::None {
            return false;
        }
        self.rebuild(projects);
        true
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn shells(&self) -> &[ModalShell] {
        &self.shells
    }

    fn index_of(&self, slug: &str) -> Option<usize> {
        self.shells.iter().position(|s| s.target().slug == slug)
    }

    /// Shell currently occupying the modal slot
    pub fn active(&self) -> Option<&ModalShell> {
        let slug = self.modal.preview_slug()?;
        self.index_of(slug).map(|i| &self.shells[i])
    }

    fn active_mut(&mut self) -> Option<&mut ModalShell> {
        let index = self.index_of(self.modal.preview_slug()?)?;
        Some(&mut self.shells[index])
    }

    pub fn open(&mut self, slug: &str, now: f64) -> Vec<PreviewCommand> {
        let Some(index) = self.index_of(slug) else {
            tracing::warn!("no preview for project {}", slug);
            return Vec::new();
        };

        let mut commands = Vec::new();
        if self.modal.preview_slug() != Some(slug) {
            commands.extend(self.close());
        }
        commands.extend(self.shells[index].open(now));
        self.modal = Modal::Preview {
            slug: slug.to_string(),
        };
        commands
    }

    pub fn close(&mut self) -> Vec<PreviewCommand> {
        self.dispatch(PreviewEvent::Close)
    }

    pub fn toggle_fullscreen(&mut self) -> Vec<PreviewCommand> {
        self.dispatch(PreviewEvent::ToggleFullscreen)
    }

    /// Feed an event to the open modal, if any, then settle the slot
    pub fn dispatch(&mut self, event: PreviewEvent) -> Vec<PreviewCommand> {
        let Some(shell) = self.active_mut() else {
            return Vec::new();
        };
        let commands = shell.dispatch(event);
        if !shell.is_open() {
            self.modal = Modal::None;
        }
        commands
    }

    /// Route a platform signal to the open modal
    pub fn handle_signal(&mut self, signal: HostSignal) -> Vec<PreviewCommand> {
        match signal {
            HostSignal::EscapePressed => self.escape_pressed(),
            HostSignal::FrameLoaded { token } => self.dispatch(PreviewEvent::FrameLoaded { token }),
            HostSignal::FrameFailed { token } => self.dispatch(PreviewEvent::FrameFailed { token }),
        }
    }

    pub fn escape_pressed(&mut self) -> Vec<PreviewCommand> {
        let Some(shell) = self.active_mut() else {
            return Vec::new();
        };
        let commands = shell.escape_pressed();
        self.modal = Modal::None;
        commands
    }
}
