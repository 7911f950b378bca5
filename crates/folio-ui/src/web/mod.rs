//! Browser implementations of the shell's platform seams

mod document;
mod frame;

pub use document::WebDocumentHost;
pub use frame::IframeHost;
