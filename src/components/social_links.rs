//! Social Links Component
//!
//! GitHub / LinkedIn profile links, as bare icons or labelled buttons.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::models::Links;

/// Icon-only profile links (hero and footer)
#[component]
pub fn SocialIcons(
    links: Links,
    #[prop(default = 24)] size: u32,
    #[prop(into)] class: String,
) -> impl IntoView {
    view! {
        <div class=class>
            <a href=links.github target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                <Icon kind=IconKind::Github size=size />
            </a>
            <a href=links.linkedin target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                <Icon kind=IconKind::Linkedin size=size />
            </a>
        </div>
    }
}

/// Labelled profile buttons (contact section)
#[component]
pub fn SocialButtons(links: Links) -> impl IntoView {
    view! {
        <div class="social-buttons">
            <a href=links.github target="_blank" rel="noopener noreferrer" class="social-btn github">
                <Icon kind=IconKind::Github size=24 class="social-btn-icon" />
                "GitHub"
            </a>
            <a href=links.linkedin target="_blank" rel="noopener noreferrer" class="social-btn linkedin">
                <Icon kind=IconKind::Linkedin size=24 class="social-btn-icon" />
                "LinkedIn"
            </a>
        </div>
    }
}
