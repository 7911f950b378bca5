//! Preview Modal
//!
//! Chrome around an embedded project: title bar with refresh, fullscreen,
//! open-externally and close controls, a spinner while loading, and an
//! error panel with two recovery actions. The embedded page itself is a
//! DOM element positioned over `frame_rect`; this module only reserves
//! the space for it.

use egui::{Align, Align2, Color32, Layout, RichText, Sense, Vec2};

use crate::preview::{PreviewFailure, PreviewPhase};
use crate::shell::ModalShell;
use crate::theme;

/// Windowed modal size as a fraction of the screen
const WINDOWED_FRACTION: f32 = 0.85;

/// What the user did in the modal this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewModalAction {
    Close,
    Refresh,
    ToggleFullscreen,
    /// Error panel "Reconnect"
    Reconnect,
    OpenExternally,
}

/// Result of rendering the modal
#[derive(Debug, Default)]
pub struct PreviewModalResponse {
    pub action: Option<PreviewModalAction>,
    /// Where the embedded page goes, in screen points
    pub frame_rect: Option<egui::Rect>,
}

/// Render the modal for an open shell. Does nothing when closed.
pub fn preview_modal(ctx: &egui::Context, shell: &ModalShell) -> PreviewModalResponse {
    let mut response = PreviewModalResponse::default();
    if !shell.is_open() {
        return response;
    }

    let session = shell.session();
    let target = shell.target();
    let accent = theme::accent(target);
    let screen = ctx.screen_rect();

    // Backdrop: dims the page and swallows its input (above panels,
    // below windows). Clicking it closes the modal.
    let backdrop = egui::Area::new(egui::Id::new("preview_backdrop"))
        .order(egui::Order::PanelResizeLine)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let backdrop = ui.allocate_rect(screen, Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, Color32::from_black_alpha(180));
            backdrop
        });
    if backdrop.inner.clicked() {
        response.action = Some(PreviewModalAction::Close);
    }

    let rect = if session.is_fullscreen() {
        screen
    } else {
        egui::Rect::from_center_size(screen.center(), screen.size() * WINDOWED_FRACTION)
    };

    egui::Window::new(format!("preview_{}", target.slug))
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .fixed_rect(rect)
        .frame(
            egui::Frame::window(&ctx.style())
                .inner_margin(0.0)
                .stroke(egui::Stroke::new(1.0, accent)),
        )
        .show(ctx, |ui| {
            // Title bar
            egui::Frame::none()
                .fill(Color32::from_rgb(24, 24, 32))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("●").color(accent));
                        ui.label(RichText::new(&target.title).strong().color(Color32::WHITE));
                        ui.label(RichText::new(&target.url).small().color(Color32::GRAY));

                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.button("✕").on_hover_text("Close (Esc)").clicked() {
                                response.action = Some(PreviewModalAction::Close);
                            }
                            let fullscreen_label = if session.is_fullscreen() {
                                "🗗"
                            } else {
                                "⛶"
                            };
                            if ui
                                .button(fullscreen_label)
                                .on_hover_text("Toggle fullscreen")
                                .clicked()
                            {
                                response.action = Some(PreviewModalAction::ToggleFullscreen);
                            }
                            if ui.button("↗").on_hover_text("Open in new tab").clicked() {
                                response.action = Some(PreviewModalAction::OpenExternally);
                            }
                            if ui.button("⟳").on_hover_text("Reload preview").clicked() {
                                response.action = Some(PreviewModalAction::Refresh);
                            }
                        });
                    });
                });

            // Body: reserved for the embedded page
            let (body, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
            response.frame_rect = Some(body);

            match session.phase() {
                PreviewPhase::Loading => {
                    let spinner = egui::Rect::from_center_size(body.center(), Vec2::splat(32.0));
                    ui.put(spinner, egui::Spinner::new().size(32.0).color(accent));
                    ui.painter().text(
                        body.center() + Vec2::new(0.0, 36.0),
                        Align2::CENTER_TOP,
                        format!("Loading {}…", target.title),
                        egui::FontId::proportional(14.0),
                        Color32::GRAY,
                    );
                }
                PreviewPhase::Error(failure) => {
                    if let Some(action) = error_panel(ui, body, &target.title, failure) {
                        response.action = Some(action);
                    }
                }
                PreviewPhase::Ready | PreviewPhase::Idle => {}
            }
        });

    response
}

/// Full-panel takeover shown when the embedded page did not load
fn error_panel(
    ui: &mut egui::Ui,
    body: egui::Rect,
    title: &str,
    failure: PreviewFailure,
) -> Option<PreviewModalAction> {
    let detail = match failure {
        PreviewFailure::Rejected => "The site refused the connection or failed to load.",
        PreviewFailure::TimedOut => "The site took too long to respond.",
    };

    let mut action = None;
    let panel = egui::Rect::from_center_size(body.center(), Vec2::new(360.0, 160.0));
    ui.allocate_new_ui(egui::UiBuilder::new().max_rect(panel), |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("Couldn't load {title}"))
                    .size(18.0)
                    .strong()
                    .color(Color32::from_rgb(248, 113, 113)),
            );
            ui.add_space(6.0);
            ui.label(RichText::new(detail).color(Color32::GRAY));
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Reconnect").clicked() {
                    action = Some(PreviewModalAction::Reconnect);
                }
                if ui.button("Open externally").clicked() {
                    action = Some(PreviewModalAction::OpenExternally);
                }
            });
        });
    });
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::PreviewTarget;
    use crate::shell::DetachedHost;
    use egui::{pos2, vec2, Event, Modifiers, PointerButton, Pos2, RawInput, Rect};
    use std::rc::Rc;

    fn open_shell() -> ModalShell {
        let target = PreviewTarget {
            slug: "studio".to_string(),
            title: "Studio".to_string(),
            url: "https://studio.example.com".to_string(),
            snapshot_url: "/static/snapshots/studio.png".to_string(),
            accent: [99, 102, 241],
        };
        let mut shell = ModalShell::new(target, Rc::new(DetachedHost));
        shell.open(0.0);
        shell
    }

    fn input(events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1000.0, 800.0))),
            events,
            ..Default::default()
        }
    }

    fn press(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Let the layers settle, then click at `pos`; returns the release frame's response
    fn click_at(pos: Pos2) -> PreviewModalResponse {
        let ctx = egui::Context::default();
        let shell = open_shell();
        let mut last = PreviewModalResponse::default();
        for events in [
            vec![],
            vec![],
            vec![Event::PointerMoved(pos)],
            vec![press(pos, true)],
            vec![press(pos, false)],
        ] {
            let _ = ctx.run(input(events), |ctx| {
                egui::CentralPanel::default().show(ctx, |_| {});
                last = preview_modal(ctx, &shell);
            });
        }
        last
    }

    #[test]
    fn test_backdrop_click_closes() {
        let response = click_at(pos2(10.0, 10.0));
        assert_eq!(response.action, Some(PreviewModalAction::Close));
    }

    #[test]
    fn test_click_inside_body_does_not_close() {
        let response = click_at(pos2(500.0, 600.0));
        assert_eq!(response.action, None);
    }

    #[test]
    fn test_windowed_frame_rect_inside_screen() {
        let ctx = egui::Context::default();
        let shell = open_shell();
        let mut frame_rect = None;
        let _ = ctx.run(input(vec![]), |ctx| {
            frame_rect = preview_modal(ctx, &shell).frame_rect;
        });
        let rect = frame_rect.expect("body reserved");
        assert!(rect.min.x > 0.0 && rect.max.x < 1000.0);
        assert!(rect.min.y > 0.0 && rect.max.y < 800.0);
    }
}
