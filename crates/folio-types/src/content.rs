//! Project catalog
//!
//! Static content shown on the projects page. Each entry with a
//! `preview_url` gets a live preview modal in the UI.

use serde::{Deserialize, Serialize};

/// Summary of a showcased project, as returned by `GET /api/projects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Stable identifier, used to key preview modals
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Site embedded in the live preview modal
    pub preview_url: String,
    /// Static snapshot shown by the launch trigger
    pub snapshot_url: String,
    /// Theme accent as RGB
    pub accent: [u8; 3],
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProjectSummary {
    fn entry(
        slug: &str,
        title: &str,
        description: &str,
        preview_url: &str,
        accent: [u8; 3],
        tags: &[&str],
    ) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            preview_url: preview_url.to_string(),
            snapshot_url: format!("/static/snapshots/{slug}.png"),
            accent,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// The projects that ship with a live preview
pub fn featured_projects() -> Vec<ProjectSummary> {
    vec![
        ProjectSummary::entry(
            "studio",
            "Studio",
            "Design agency landing site with scroll-linked reveals",
            "https://studio.example.com",
            [99, 102, 241],
            &["web", "animation"],
        ),
        ProjectSummary::entry(
            "ledger",
            "Ledger",
            "Personal finance dashboard with live charts",
            "https://ledger.example.com",
            [16, 185, 129],
            &["dashboard", "charts"],
        ),
        ProjectSummary::entry(
            "atlas",
            "Atlas",
            "Travel journal with interactive maps",
            "https://atlas.example.com",
            [245, 158, 11],
            &["maps", "web"],
        ),
    ]
}
