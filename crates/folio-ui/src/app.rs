//! Folio Application
//!
//! Layout:
//! ┌──────────────────────────────────────┐
//! │  Home · About · Projects · Contact   │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │  Page body                           │
//! │                                      │
//! └──────────────────────────────────────┘
//!
//! Project cards open a preview modal drawn over the page; the embedded
//! site is a DOM frame positioned over the modal body each frame.

use std::future::Future;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use eframe::egui;
use egui::{Color32, RichText};
use folio_types::{featured_projects, ContactAccepted, ContactSubmission, ProjectSummary};

use crate::api::ApiClient;
use crate::launch::ProjectCard;
use crate::modals::{preview_modal, PreviewModalAction};
use crate::panels::{ContactPanel, ContactPanelAction, TaskStatus};
use crate::preview::{PreviewCommand, PreviewEvent};
use crate::shell::{DetachedHost, DocumentHost, FrameHost, SignalQueue};
use crate::showcase::Showcase;
use crate::state::Page;
use crate::theme;

type Pending<T> = Arc<Mutex<Option<Result<T, String>>>>;

/// Main application state
pub struct FolioApp {
    // API client
    api: ApiClient,

    // Navigation
    page: Page,

    // Project cards and their preview modals
    asset_base: String,
    cards: Vec<ProjectCard>,
    showcase: Showcase,
    frame_host: Rc<dyn FrameHost>,
    signals: SignalQueue,

    // Contact form
    contact: ContactPanel,

    // Async result holders
    pending_projects: Option<Pending<Vec<ProjectSummary>>>,
    pending_contact: Option<Pending<ContactAccepted>>,

    // Tokio runtime for native builds
    #[cfg(not(target_arch = "wasm32"))]
    runtime: Option<Arc<tokio::runtime::Runtime>>,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let signals = SignalQueue::new();

        #[cfg(target_arch = "wasm32")]
        let (base_url, document_host, frame_host) = {
            let window = web_sys::window();
            let base_url = window
                .as_ref()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_else(|| "http://localhost:3000".to_string());
            match window.and_then(|w| w.document()) {
                Some(document) => {
                    let document_host: Rc<dyn DocumentHost> = Rc::new(
                        crate::web::WebDocumentHost::new(document.clone(), signals.clone()),
                    );
                    let frame_host: Rc<dyn FrameHost> =
                        Rc::new(crate::web::IframeHost::new(document, signals.clone()));
                    (base_url, document_host, frame_host)
                }
                None => {
                    tracing::warn!("no document; previews will not embed");
                    let document_host: Rc<dyn DocumentHost> = Rc::new(DetachedHost);
                    let frame_host: Rc<dyn FrameHost> = Rc::new(DetachedHost);
                    (base_url, document_host, frame_host)
                }
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        let (base_url, document_host, frame_host) = {
            let document_host: Rc<dyn DocumentHost> = Rc::new(DetachedHost);
            let frame_host: Rc<dyn FrameHost> = Rc::new(DetachedHost);
            ("http://localhost:3000".to_string(), document_host, frame_host)
        };

        #[cfg(not(target_arch = "wasm32"))]
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => Some(Arc::new(runtime)),
            Err(e) => {
                tracing::error!("failed to create tokio runtime: {}", e);
                None
            }
        };

        let mut app = Self {
            api: ApiClient::new(&base_url),
            page: Page::default(),
            asset_base: base_url.clone(),
            cards: Self::cards(&featured_projects(), &base_url),
            showcase: Showcase::new(&featured_projects(), document_host),
            frame_host,
            signals,
            contact: ContactPanel::new(),
            pending_projects: None,
            pending_contact: None,
            #[cfg(not(target_arch = "wasm32"))]
            runtime,
        };

        app.load_projects();
        app
    }

    fn cards(projects: &[ProjectSummary], asset_base: &str) -> Vec<ProjectCard> {
        projects
            .iter()
            .map(|project| ProjectCard::new(project, asset_base))
            .collect()
    }

    // =========================================================================
    // API CALLS
    // =========================================================================

    #[cfg(target_arch = "wasm32")]
    fn spawn<T: 'static>(
        &self,
        task: impl Future<Output = Result<T, String>> + 'static,
    ) -> Pending<T> {
        let result = Arc::new(Mutex::new(None));
        let result_clone = result.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let res = task.await;
            if let Ok(mut slot) = result_clone.lock() {
                *slot = Some(res);
            }
        });
        result
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn<T: Send + 'static>(
        &self,
        task: impl Future<Output = Result<T, String>> + Send + 'static,
    ) -> Pending<T> {
        let result = Arc::new(Mutex::new(None));
        let result_clone = result.clone();
        match &self.runtime {
            Some(runtime) => {
                runtime.spawn(async move {
                    let res = task.await;
                    if let Ok(mut slot) = result_clone.lock() {
                        *slot = Some(res);
                    }
                });
            }
            None => {
                if let Ok(mut slot) = result.lock() {
                    *slot = Some(Err("no async runtime available".to_string()));
                }
            }
        }
        result
    }

    fn load_projects(&mut self) {
        let api = self.api.clone();
        self.pending_projects = Some(self.spawn(async move {
            api.get::<Vec<ProjectSummary>>("/api/projects").await
        }));
    }

    fn submit_contact(&mut self, body: ContactSubmission) {
        let api = self.api.clone();
        self.pending_contact = Some(self.spawn(async move {
            api.post::<ContactAccepted, _>("/api/contact", &body).await
        }));
    }

    // =========================================================================
    // ASYNC RESULT HANDLING
    // =========================================================================

    fn take<T>(pending: &Option<Pending<T>>) -> Option<Result<T, String>> {
        pending
            .as_ref()
            .and_then(|p| p.try_lock().ok())
            .and_then(|mut g| g.take())
    }

    fn check_pending_requests(&mut self, now: f64) {
        if let Some(result) = Self::take(&self.pending_projects) {
            match result {
                Ok(projects) => {
                    if self.showcase.replace_projects(&projects) {
                        self.cards = Self::cards(&projects, &self.asset_base);
                    } else {
                        tracing::debug!("modal open, keeping built-in project list");
                    }
                }
                Err(e) => tracing::warn!("failed to load projects: {}", e),
            }
            self.pending_projects = None;
        }

        if let Some(result) = Self::take(&self.pending_contact) {
            if let Err(e) = &result {
                tracing::warn!("contact submission failed: {}", e);
            }
            self.contact.on_response(result, now);
            self.pending_contact = None;
        }
    }

    // =========================================================================
    // PREVIEW MODAL
    // =========================================================================

    fn execute(&self, ctx: &egui::Context, commands: Vec<PreviewCommand>) {
        for command in commands {
            match command {
                PreviewCommand::MountFrame { url, token } => self.frame_host.mount(&url, token),
                PreviewCommand::UnmountFrame => self.frame_host.unmount(),
                PreviewCommand::NavigateExternal { url } => {
                    ctx.open_url(egui::OpenUrl::new_tab(url));
                }
            }
        }
    }

    fn handle_preview_action(&mut self, ctx: &egui::Context, action: PreviewModalAction, now: f64) {
        let commands = match action {
            PreviewModalAction::Close => self.showcase.close(),
            PreviewModalAction::Refresh | PreviewModalAction::Reconnect => {
                self.showcase.dispatch(PreviewEvent::Refresh { now })
            }
            PreviewModalAction::ToggleFullscreen => self.showcase.toggle_fullscreen(),
            PreviewModalAction::OpenExternally => {
                self.showcase.dispatch(PreviewEvent::OpenExternally)
            }
        };
        self.execute(ctx, commands);
    }

    fn render_preview_modal(&mut self, ctx: &egui::Context, now: f64) {
        let response = match self.showcase.active() {
            Some(shell) => preview_modal(ctx, shell),
            None => return,
        };

        if let Some(action) = response.action {
            self.handle_preview_action(ctx, action, now);
        }

        // Place the embedded page over the modal body; it stays hidden
        // until loaded so the spinner and error panel show through
        if let (Some(shell), Some(rect)) = (self.showcase.active(), response.frame_rect) {
            self.frame_host
                .place(theme::frame_rect(rect), shell.session().is_ready());
        }
    }

    // =========================================================================
    // PAGES
    // =========================================================================

    fn render_nav(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("folio").strong().size(18.0));
            ui.add_space(24.0);
            for page in Page::ALL {
                if ui.selectable_label(self.page == page, page.label()).clicked() {
                    self.page = page;
                }
            }
        });
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Building for the web, end to end").size(32.0).strong());
            ui.add_space(12.0);
            ui.label(
                RichText::new("Frontend, backend and everything in between.").color(Color32::GRAY),
            );
            ui.add_space(24.0);
            ui.horizontal(|ui| {
                if ui.button("See projects").clicked() {
                    self.page = Page::Projects;
                }
                if ui.button("Get in touch").clicked() {
                    self.page = Page::Contact;
                }
            });
        });
    }

    fn render_about(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new("About").size(24.0).strong());
        ui.add_space(8.0);
        ui.label(
            "I design and build web products: interfaces, the services behind them, \
             and the deployment that keeps them running.",
        );
    }

    fn render_projects(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, now: f64) {
        ui.label(RichText::new("Projects").size(24.0).strong());
        ui.add_space(12.0);

        let mut launch = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for card in &mut self.cards {
                    ui.vertical(|ui| {
                        ui.set_width(320.0);
                        if card.trigger.ui(ui) {
                            launch = Some(card.slug().to_string());
                        }
                        ui.label(RichText::new(&card.description).color(Color32::GRAY));
                        ui.label(RichText::new(card.tags.join(" · ")).small());
                    });
                    ui.add_space(16.0);
                }
            });
        });

        if let Some(slug) = launch {
            let commands = self.showcase.open(&slug, now);
            self.execute(ctx, commands);
        }
    }

    fn render_contact(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.set_max_width(480.0);
        if let ContactPanelAction::Submit(body) = self.contact.ui(ui, now) {
            self.submit_contact(body);
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.check_pending_requests(now);

        // Platform signals since last frame (escape key, frame load/error)
        for signal in self.signals.drain() {
            let commands = self.showcase.handle_signal(signal);
            self.execute(ctx, commands);
        }

        // Escape also arrives through egui when the canvas has focus
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            let commands = self.showcase.escape_pressed();
            self.execute(ctx, commands);
        }

        let commands = self.showcase.dispatch(PreviewEvent::Tick { now });
        self.execute(ctx, commands);

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.add_space(6.0);
            self.render_nav(ui);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Home => self.render_home(ui),
            Page::About => self.render_about(ui),
            Page::Projects => self.render_projects(ui, ctx, now),
            Page::Contact => self.render_contact(ui, now),
        });

        self.render_preview_modal(ctx, now);

        let loading = self
            .showcase
            .active()
            .is_some_and(|shell| shell.session().is_loading());
        if loading || self.pending_projects.is_some() || self.pending_contact.is_some() {
            ctx.request_repaint();
        } else if self.contact.banner().is_some() || self.contact.status() == TaskStatus::InProgress
        {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
