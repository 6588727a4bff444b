//! UI Components
//!
//! Page sections and the reusable pieces they are built from.

mod about;
mod contact;
mod footer;
mod hero;
mod icon;
mod nav_bar;
mod page_section;
mod projects;
mod services;
mod social_links;

use leptos::prelude::*;

use crate::section::Section;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use nav_bar::NavBar;
pub use projects::ProjectsSection;
pub use services::ServicesSection;

/// A page section paired with the component that renders it.
///
/// `section` is the one the component passes to `PageSection`, so it is
/// also the element id the component writes.
#[derive(Clone, Copy)]
pub struct SectionView {
    pub section: Section,
    render: fn() -> AnyView,
}

impl SectionView {
    pub fn render(&self) -> AnyView {
        (self.render)()
    }
}

pub const SECTION_VIEWS: [SectionView; 5] = [
    SectionView { section: hero::SECTION, render: hero_view },
    SectionView { section: about::SECTION, render: about_view },
    SectionView { section: services::SECTION, render: services_view },
    SectionView { section: projects::SECTION, render: projects_view },
    SectionView { section: contact::SECTION, render: contact_view },
];

/// Component rendering `section`, if any
pub fn section_view(section: Section) -> Option<SectionView> {
    SECTION_VIEWS.iter().copied().find(|entry| entry.section == section)
}

fn hero_view() -> AnyView {
    view! { <HeroSection /> }.into_any()
}

fn about_view() -> AnyView {
    view! { <AboutSection /> }.into_any()
}

fn services_view() -> AnyView {
    view! { <ServicesSection /> }.into_any()
}

fn projects_view() -> AnyView {
    view! { <ProjectsSection /> }.into_any()
}

fn contact_view() -> AnyView {
    view! { <ContactSection /> }.into_any()
}
