//! Preview target: one parametrized controller per showcased project

use folio_types::ProjectSummary;

/// The external site a preview embeds, plus its theme tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTarget {
    pub slug: String,
    pub title: String,
    pub url: String,
    pub snapshot_url: String,
    /// Theme accent as RGB
    pub accent: [u8; 3],
}

impl From<&ProjectSummary> for PreviewTarget {
    fn from(project: &ProjectSummary) -> Self {
        Self {
            slug: project.slug.clone(),
            title: project.title.clone(),
            url: project.preview_url.clone(),
            snapshot_url: project.snapshot_url.clone(),
            accent: project.accent,
        }
    }
}
