//! Services Section

use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::context::use_site;
use crate::markdown::parse_markdown_inline;
use crate::section::Section;

/// Page section this component renders
pub const SECTION: Section = Section::Services;

#[component]
pub fn ServicesSection() -> impl IntoView {
    let site = use_site();
    let services = site.content().services.clone();

    view! {
        <PageSection section=SECTION class="services muted">
            <div class="container">
                <h2 class="section-title">"Services"</h2>
                <div class="services-grid">
                    {services
                        .into_iter()
                        .map(|service| view! {
                            <div class="card service-card fade-up">
                                <h3>{service.title}</h3>
                                <p inner_html=parse_markdown_inline(&service.description)></p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </PageSection>
    }
}
