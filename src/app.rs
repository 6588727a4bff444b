//! Portfolio App
//!
//! Root component: loads the site content, provides it together with the
//! UI store, and renders the single-page layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{section_view, Footer, NavBar};
use crate::context::SiteContext;
use crate::models::SiteContent;
use crate::section::Section;
use crate::store::{use_ui_store, UiState, UiStateStoreFields};

/// Order the sections appear on the page
pub const PAGE_LAYOUT: [Section; 5] = [
    Section::Home,
    Section::About,
    Section::Services,
    Section::MyWork,
    Section::Contact,
];

#[component]
pub fn App() -> impl IntoView {
    match SiteContent::load() {
        Ok(content) => {
            web_sys::console::log_1(
                &format!(
                    "[APP] Loaded content: {} services, {} projects",
                    content.services.len(),
                    content.projects.len()
                )
                .into(),
            );
            provide_context(SiteContext::new(content));
            provide_context(Store::new(UiState::default()));
            view! { <Page /> }.into_any()
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[APP] Failed to load site content: {}", err).into());
            view! {
                <div class="content-error">
                    <p>"This page could not be displayed."</p>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn Page() -> impl IntoView {
    let store = use_ui_store();
    let root_class = move || store.theme().get().root_class();

    view! {
        <div class=root_class>
            <div class="page-surface">
                <NavBar />
                <main>
                    {PAGE_LAYOUT
                        .iter()
                        .filter_map(|&section| section_view(section))
                        .map(|entry| entry.render())
                        .collect_view()}
                </main>
                <Footer />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nav_target_rendered_once() {
        for section in Section::NAV {
            let count = PAGE_LAYOUT
                .iter()
                .filter(|s| s.anchor() == section.anchor())
                .count();
            assert_eq!(count, 1, "anchor '{}'", section.anchor());
        }
    }

    #[test]
    fn test_layout_renders_each_anchor_once() {
        // Anchor ids as the rendered components write them
        let ids: Vec<&str> = PAGE_LAYOUT
            .iter()
            .filter_map(|&section| section_view(section))
            .map(|entry| entry.section.anchor())
            .collect();
        assert_eq!(ids.len(), PAGE_LAYOUT.len());
        for section in Section::NAV {
            let count = ids.iter().filter(|&&id| id == section.anchor()).count();
            assert_eq!(count, 1, "anchor '{}'", section.anchor());
        }
    }

    #[test]
    fn test_layout_order() {
        let anchors: Vec<&str> = PAGE_LAYOUT.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["home", "about", "services", "mywork", "contact"]);
    }
}
