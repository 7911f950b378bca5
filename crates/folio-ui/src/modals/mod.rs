//! Modal Dialogs Module
//!
//! Contains modal dialog implementations:
//! - Preview Modal: live preview of an external project

pub mod preview_modal;

pub use preview_modal::{preview_modal, PreviewModalAction, PreviewModalResponse};
