//! Folio UI - portfolio site frontend
//!
//! - `launch`: snapshot card that opens a preview
//! - `panels`, `modals`: egui rendering
//! - `web`: DOM implementations of the preview hosts (wasm32 only)
//!
//! The preview lifecycle itself lives in `folio-preview`; its modules are
//! re-exported here.

#![allow(clippy::new_without_default)]

pub mod api;
pub mod app;
pub mod launch;
pub mod modals;
pub mod panels;
pub mod state;
pub mod theme;

pub use folio_preview::{preview, shell, showcase};

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::FolioApp;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("folio_canvas"))
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
    let Some(canvas) = canvas else {
        tracing::error!("canvas #folio_canvas not found");
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(FolioApp::new(cc)))),
            )
            .await
        {
            tracing::error!("failed to start eframe: {:?}", e);
        }
    });
}
