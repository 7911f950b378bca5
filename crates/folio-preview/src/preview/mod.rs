//! Live preview of an external project
//!
//! - `session`: the load/error/refresh reducer for one embedded page
//! - `target`: what a preview points at and how it is themed

pub mod session;
pub mod target;

pub use session::{
    PreviewCommand, PreviewEvent, PreviewFailure, PreviewPhase, PreviewSession, LOAD_TIMEOUT_SECS,
};
pub use target::PreviewTarget;
