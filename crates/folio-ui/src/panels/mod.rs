//! UI Panels
//!
//! Page sections that own their own widget state and report what the
//! visitor did as an action enum.

mod contact;

pub use contact::{
    Banner, BannerKind, ContactPanel, ContactPanelAction, TaskStatus, BANNER_TTL_SECS,
};
