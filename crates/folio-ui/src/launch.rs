//! Launch Trigger
//!
//! Static snapshot of a project with a hover affordance. Clicking it asks
//! the app to open the project's preview modal. The only state is whether
//! the snapshot image has arrived yet.

use egui::{Color32, RichText, Sense, Vec2};
use folio_types::ProjectSummary;

use crate::preview::PreviewTarget;
use crate::theme;

/// Card size in points
const CARD_SIZE: Vec2 = Vec2::new(320.0, 200.0);

/// What the card is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSurface {
    Placeholder,
    Snapshot,
}

pub struct LaunchTrigger {
    target: PreviewTarget,
    image_loaded: bool,
}

impl LaunchTrigger {
    pub fn new(target: PreviewTarget) -> Self {
        Self {
            target,
            image_loaded: false,
        }
    }

    pub fn target(&self) -> &PreviewTarget {
        &self.target
    }

    pub fn surface(&self) -> TriggerSurface {
        if self.image_loaded {
            TriggerSurface::Snapshot
        } else {
            TriggerSurface::Placeholder
        }
    }

    /// Record that the snapshot finished loading; never reverts
    pub fn mark_image_loaded(&mut self) {
        self.image_loaded = true;
    }

    /// Render the card. Returns true when activated.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(CARD_SIZE, Sense::click());
        let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

        let image = egui::Image::new(self.target.snapshot_url.clone())
            .rounding(8.0)
            .fit_to_exact_size(CARD_SIZE);
        if !self.image_loaded {
            if let Ok(egui::load::TexturePoll::Ready { .. }) =
                image.load_for_size(ui.ctx(), CARD_SIZE)
            {
                self.mark_image_loaded();
            }
        }

        let accent = theme::accent(&self.target);
        let painter = ui.painter_at(rect);
        match self.surface() {
            TriggerSurface::Snapshot => {
                image.paint_at(ui, rect);
            }
            TriggerSurface::Placeholder => {
                painter.rect_filled(rect, 8.0, accent.gamma_multiply(0.25));
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    &self.target.title,
                    egui::FontId::proportional(22.0),
                    Color32::WHITE,
                );
            }
        }

        if response.hovered() {
            painter.rect_filled(rect, 8.0, Color32::from_black_alpha(120));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "▶ Live preview",
                egui::FontId::proportional(18.0),
                accent,
            );
        }

        ui.label(RichText::new(&self.target.title).strong());

        response.clicked()
    }
}

/// A gallery entry: the launch card plus its caption
pub struct ProjectCard {
    pub trigger: LaunchTrigger,
    pub description: String,
    pub tags: Vec<String>,
}

impl ProjectCard {
    /// Site-relative snapshot paths are resolved against `asset_base`
    pub fn new(project: &ProjectSummary, asset_base: &str) -> Self {
        let mut target = PreviewTarget::from(project);
        if target.snapshot_url.starts_with('/') {
            target.snapshot_url = format!(
                "{}{}",
                asset_base.trim_end_matches('/'),
                target.snapshot_url
            );
        }
        Self {
            trigger: LaunchTrigger::new(target),
            description: project.description.clone(),
            tags: project.tags.clone(),
        }
    }

    pub fn slug(&self) -> &str {
        &self.trigger.target().slug
    }
}
