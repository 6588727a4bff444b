//! About Section
//!
//! Portrait, markdown bio and the labelled fact list.

use leptos::prelude::*;

use crate::assets::asset_url;
use crate::components::icon::{Icon, IconKind};
use crate::components::page_section::PageSection;
use crate::context::use_site;
use crate::markdown::parse_markdown;
use crate::section::Section;

/// Page section this component renders
pub const SECTION: Section = Section::About;

#[component]
pub fn AboutSection() -> impl IntoView {
    let site = use_site();
    let about = site.content().about.clone();
    let bio_html = parse_markdown(&about.bio);
    let portrait_src = asset_url(&about.portrait.src);

    view! {
        <PageSection section=SECTION class="about surface">
            <div class="container narrow">
                <h2 class="section-title">"About Me"</h2>
                <div class="about-grid">
                    <img src=portrait_src alt=about.portrait.alt class="portrait zoom-in" />
                    <div>
                        <div class="about-bio" inner_html=bio_html></div>
                        <div class="about-facts">
                            {about
                                .facts
                                .into_iter()
                                .map(|fact| {
                                    let icon = fact.icon.as_deref().and_then(IconKind::from_name);
                                    view! {
                                        <div class="fact">
                                            <span class="fact-label">{format!("{}:", fact.label)}</span>
                                            <span class="fact-value">
                                                {icon.map(|kind| view! { <Icon kind=kind size=16 class="fact-icon" /> })}
                                                {fact.value}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </PageSection>
    }
}
