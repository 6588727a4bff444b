//! Hero Section

use leptos::prelude::*;

use crate::assets::asset_url;
use crate::components::page_section::PageSection;
use crate::components::social_links::SocialIcons;
use crate::context::use_site;
use crate::section::Section;

/// Page section this component renders
pub const SECTION: Section = Section::Home;

#[component]
pub fn HeroSection() -> impl IntoView {
    let site = use_site();
    let content = site.content();
    let name = content.owner.name.clone();
    let headline = content.owner.headline.clone();
    let background = content.hero.background.clone();
    let links = content.links.clone();

    view! {
        <PageSection section=SECTION class="hero">
            <div class="hero-backdrop">
                <div class="hero-overlay"></div>
                <img src=asset_url(&background.src) alt=background.alt class="hero-image" />
            </div>
            <div class="hero-content fade-up">
                <h1 class="hero-title">{name}</h1>
                <p class="hero-headline">{headline}</p>
                <SocialIcons links=links size=24 class="hero-social" />
            </div>
        </PageSection>
    }
}
