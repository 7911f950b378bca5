//! Folio Preview - live preview lifecycle, independent of any renderer
//!
//! - `preview`: load/error/refresh reducer for an embedded project
//! - `shell`: modal shell owning document-wide resources while open
//! - `showcase`: the project shells and their shared modal slot
//!
//! Nothing here touches the DOM or egui; the UI crate drives it through
//! events and executes the commands it returns.

pub mod preview;
pub mod shell;
pub mod showcase;

pub use showcase::{Modal, Showcase};
