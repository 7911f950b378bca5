//! Page-level UI state

/// Top navigation sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Projects, Page::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
        }
    }
}
