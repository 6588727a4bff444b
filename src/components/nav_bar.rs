//! Navigation Bar Component
//!
//! Fixed top bar: brand initials, section links, theme toggle and the
//! mobile menu with its open/close button.

use leptos::prelude::*;
use leptos_reveal::{anchor_href, scroll_to_anchor, scroll_to_top};

use crate::components::icon::{Icon, IconKind};
use crate::context::use_site;
use crate::section::Section;
use crate::store::{store_toggle_menu, store_toggle_theme, use_ui_store, UiStateStoreFields};

/// Smooth-scrolling link to a page section
#[component]
pub fn NavLink(section: Section, #[prop(optional)] mobile: bool) -> impl IntoView {
    let anchor = section.anchor();
    let class = if mobile { "nav-link nav-link-mobile" } else { "nav-link" };

    view! {
        <a
            href=anchor_href(anchor)
            class=class
            on:click=move |ev| {
                // Missing target: let the browser follow the href itself
                if scroll_to_anchor(anchor) {
                    ev.prevent_default();
                }
            }
        >
            {section.label()}
        </a>
    }
}

/// Sun/moon button flipping the page theme
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_ui_store();
    let is_dark = move || store.theme().get().is_dark();

    view! {
        <button
            class="icon-btn theme-toggle"
            aria-label="Toggle dark mode"
            on:click=move |_| store_toggle_theme(&store)
        >
            {move || {
                let kind = if is_dark() { IconKind::Sun } else { IconKind::Moon };
                view! { <Icon kind=kind size=20 /> }
            }}
        </button>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let site = use_site();
    let store = use_ui_store();
    let initials = site.content().owner.initials.clone();
    let menu_open = move || store.menu_open().get();

    view! {
        <nav class="nav-bar">
            <div class="nav-inner">
                <a
                    href=anchor_href(Section::Home.anchor())
                    class="nav-brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_top();
                    }
                >
                    {initials}
                </a>

                // Desktop Navigation
                <div class="nav-links">
                    {Section::NAV.iter().map(|&section| view! { <NavLink section=section /> }).collect_view()}
                </div>

                <div class="nav-actions">
                    <ThemeToggle />
                    <button
                        class="icon-btn menu-toggle"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu_open().to_string()
                        on:click=move |_| store_toggle_menu(&store)
                    >
                        {move || {
                            let kind = if menu_open() { IconKind::Close } else { IconKind::Menu };
                            view! { <Icon kind=kind size=24 /> }
                        }}
                    </button>
                </div>
            </div>

            // Mobile Navigation
            <Show when=menu_open>
                <div class="nav-mobile-panel">
                    {Section::NAV
                        .iter()
                        .map(|&section| view! { <NavLink section=section mobile=true /> })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
