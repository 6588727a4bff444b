//! Page Section Component
//!
//! `<section>` wrapper carrying the anchor id. Sections that reveal on
//! scroll get `animate-slide-in` the first time they enter the viewport.

use leptos::prelude::*;
use leptos_reveal::{use_in_view, RevealOptions};

use crate::section::Section;

#[component]
pub fn PageSection(
    section: Section,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Section>::new();
    let reveals = section.reveals_on_scroll();
    let in_view = if reveals {
        use_in_view(node_ref, RevealOptions::default())
    } else {
        signal(false).0
    };

    let section_class = move || {
        if reveals && in_view.get() {
            format!("section {} animate-slide-in", class)
        } else {
            format!("section {}", class)
        }
    };

    view! {
        <section id=section.anchor() node_ref=node_ref class=section_class>
            {children()}
        </section>
    }
}
