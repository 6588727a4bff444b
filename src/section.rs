//! Page Sections
//!
//! Anchor ids and navigation labels for the sections of the page.

/// A top-level section of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    MyWork,
    Contact,
}

impl Section {
    /// Navigation order (desktop bar and mobile panel)
    pub const NAV: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::MyWork,
        Section::Contact,
    ];

    /// Element id the section renders with
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::MyWork => "mywork",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::MyWork => "My Work",
            Section::Contact => "Contact",
        }
    }

    /// Whether the section slides in when first scrolled into view
    pub fn reveals_on_scroll(self) -> bool {
        matches!(self, Section::About | Section::Services | Section::MyWork)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_anchors_unique() {
        let anchors: HashSet<&str> = Section::NAV.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), Section::NAV.len());
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = Section::NAV.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Home", "About", "Services", "My Work", "Contact"]);
    }

    #[test]
    fn test_hero_and_contact_do_not_reveal() {
        assert!(!Section::Home.reveals_on_scroll());
        assert!(!Section::Contact.reveals_on_scroll());
        assert!(Section::MyWork.reveals_on_scroll());
    }
}
