//! Contact Panel
//!
//! Four-field form with inline validation, a disabled submit button while
//! a request is in flight, and a dismissible banner that clears itself.

use egui::{Color32, RichText, TextEdit, Ui};
use folio_types::{ContactAccepted, ContactField, ContactSubmission};

/// Seconds a result banner stays up before clearing itself
pub const BANNER_TTL_SECS: f64 = 5.0;

/// Lifecycle of the submit request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Idle,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    shown_at: f64,
}

/// What the panel wants the app to do
#[derive(Debug, Clone, PartialEq)]
pub enum ContactPanelAction {
    None,
    Submit(ContactSubmission),
}

/// Contact form widget
#[derive(Default)]
pub struct ContactPanel {
    name: String,
    email: String,
    subject: String,
    message: String,
    /// Fields the visitor has left at least once; only these show errors
    touched: Vec<ContactField>,
    status: TaskStatus,
    banner: Option<Banner>,
}

impl ContactPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Current form contents as a request body
    pub fn draft(&self) -> ContactSubmission {
        ContactSubmission::new(&self.name, &self.email, &self.subject, &self.message)
    }

    /// Inline error for a field, shown only once it has been touched
    pub fn visible_error(&self, field: ContactField) -> Option<&'static str> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.draft().field_error(field)
    }

    fn touch(&mut self, field: ContactField) {
        if !self.touched.contains(&field) {
            self.touched.push(field);
        }
    }

    /// Validate locally and, if clean, move to `InProgress` and hand back
    /// the body to post. A second submit while one is in flight is ignored.
    pub fn try_submit(&mut self) -> Option<ContactSubmission> {
        if self.status == TaskStatus::InProgress {
            return None;
        }
        for field in ContactField::ALL {
            self.touch(field);
        }
        let draft = self.draft();
        if draft.validate().is_err() {
            return None;
        }
        self.status = TaskStatus::InProgress;
        self.banner = None;
        Some(draft)
    }

    /// Apply the server's answer. Success clears the form.
    pub fn on_response(&mut self, result: Result<ContactAccepted, String>, now: f64) {
        self.status = TaskStatus::Finished;
        let (kind, text) = match result {
            Ok(accepted) => {
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                self.touched.clear();
                (BannerKind::Success, accepted.message)
            }
            Err(e) => (BannerKind::Error, e),
        };
        self.banner = Some(Banner {
            kind,
            text,
            shown_at: now,
        });
    }

    /// Drop the banner once it has been up for [`BANNER_TTL_SECS`]
    pub fn expire_banner(&mut self, now: f64) {
        if let Some(banner) = &self.banner {
            if now - banner.shown_at >= BANNER_TTL_SECS {
                self.banner = None;
            }
        }
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Render the form
    pub fn ui(&mut self, ui: &mut Ui, now: f64) -> ContactPanelAction {
        let mut action = ContactPanelAction::None;
        self.expire_banner(now);

        ui.vertical(|ui| {
            ui.label(RichText::new("Get in touch").strong().size(20.0));
            ui.add_space(8.0);

            if let Some(banner) = &self.banner {
                let color = match banner.kind {
                    BannerKind::Success => Color32::from_rgb(74, 222, 128),
                    BannerKind::Error => Color32::from_rgb(248, 113, 113),
                };
                let mut dismissed = false;
                egui::Frame::none()
                    .stroke(egui::Stroke::new(1.0, color))
                    .rounding(6.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&banner.text).color(color));
                            if ui.small_button("✕").clicked() {
                                dismissed = true;
                            }
                        });
                    });
                if dismissed {
                    self.dismiss_banner();
                }
                ui.add_space(8.0);
            }

            for field in ContactField::ALL {
                self.field_ui(ui, field);
            }

            ui.add_space(8.0);
            let busy = self.status == TaskStatus::InProgress;
            let label = if busy { "Sending…" } else { "Send message" };
            if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
                if let Some(body) = self.try_submit() {
                    action = ContactPanelAction::Submit(body);
                }
            }
        });

        action
    }

    fn field_ui(&mut self, ui: &mut Ui, field: ContactField) {
        ui.label(field.label());
        let multiline = field == ContactField::Message;
        let buffer = self.field_mut(field);
        let edit = if multiline {
            TextEdit::multiline(buffer).desired_rows(5)
        } else {
            TextEdit::singleline(buffer)
        };
        let response = ui.add(edit.desired_width(f32::INFINITY));
        if response.lost_focus() {
            self.touch(field);
        }
        if let Some(error) = self.visible_error(field) {
            ui.label(RichText::new(error).small().color(Color32::from_rgb(248, 113, 113)));
        }
        ui.add_space(4.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactPanel {
        let mut panel = ContactPanel::new();
        panel.set_field(ContactField::Name, "Ada");
        panel.set_field(ContactField::Email, "ada@example.com");
        panel.set_field(ContactField::Subject, "Hello");
        panel.set_field(ContactField::Message, "Nice work");
        panel
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut panel = ContactPanel::new();
        assert_eq!(panel.visible_error(ContactField::Name), None);

        assert!(panel.try_submit().is_none());
        assert_eq!(
            panel.visible_error(ContactField::Name),
            Some("This field is required")
        );
        assert_eq!(panel.status(), TaskStatus::Idle);
    }

    #[test]
    fn test_invalid_email_blocks_submit() {
        let mut panel = filled();
        panel.set_field(ContactField::Email, "ada@example");
        assert!(panel.try_submit().is_none());
        assert_eq!(
            panel.visible_error(ContactField::Email),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_submit_goes_in_progress_once() {
        let mut panel = filled();
        let body = panel.try_submit().expect("valid form submits");
        assert_eq!(body.name.as_deref(), Some("Ada"));
        assert_eq!(panel.status(), TaskStatus::InProgress);
        assert!(panel.try_submit().is_none());
    }

    #[test]
    fn test_success_clears_form_and_banner_expires() {
        let mut panel = filled();
        panel.try_submit();
        panel.on_response(Ok(ContactAccepted::default()), 10.0);

        assert_eq!(panel.status(), TaskStatus::Finished);
        assert_eq!(panel.draft(), ContactSubmission::new("", "", "", ""));
        assert_eq!(panel.visible_error(ContactField::Name), None);
        let banner = panel.banner().expect("banner shown");
        assert_eq!(banner.kind, BannerKind::Success);

        panel.expire_banner(14.9);
        assert!(panel.banner().is_some());
        panel.expire_banner(15.0);
        assert!(panel.banner().is_none());
    }

    #[test]
    fn test_failure_keeps_form_and_allows_retry() {
        let mut panel = filled();
        panel.try_submit();
        panel.on_response(Err("Invalid email format".to_string()), 0.0);

        let banner = panel.banner().expect("banner shown");
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.text, "Invalid email format");
        assert_eq!(panel.draft().name.as_deref(), Some("Ada"));

        panel.dismiss_banner();
        assert!(panel.banner().is_none());
        assert!(panel.try_submit().is_some());
    }
}
