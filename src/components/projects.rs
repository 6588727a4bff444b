//! Projects Section
//!
//! "Featured Projects" slider: project cards on an autoplaying track with
//! arrows and pagination dots.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::assets::asset_url;
use crate::carousel::Carousel;
use crate::components::icon::{Icon, IconKind};
use crate::components::page_section::PageSection;
use crate::context::use_site;
use crate::markdown::parse_markdown_inline;
use crate::models::{CarouselSettings, ProjectCard};
use crate::section::Section;

/// Page section this component renders
pub const SECTION: Section = Section::MyWork;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let site = use_site();
    let projects = site.content().projects.clone();
    let settings = site.content().carousel;

    view! {
        <PageSection section=SECTION class="projects surface">
            <div class="container">
                <h2 class="section-title">"Featured Projects"</h2>
                <ProjectCarousel projects=projects settings=settings />
            </div>
        </PageSection>
    }
}

/// Single project card
#[component]
pub fn ProjectCardView(project: ProjectCard) -> impl IntoView {
    let ProjectCard { title, description, image, tags, link } = project;
    let link_label = format!("Open {}", title);

    view! {
        <div class="card project-card">
            <img src=asset_url(&image.src) alt=image.alt class="project-image" />
            <div class="project-body">
                <h3>{title}</h3>
                <p inner_html=parse_markdown_inline(&description)></p>
                <div class="project-footer">
                    <div class="project-tags">
                        {tags
                            .into_iter()
                            .map(|tag| view! { <span class=tag.color.class()>{tag.label}</span> })
                            .collect_view()}
                    </div>
                    <a href=link class="project-link" aria-label=link_label>
                        <Icon kind=IconKind::ExternalLink size=20 />
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Slider over project cards
#[component]
pub fn ProjectCarousel(projects: Vec<ProjectCard>, settings: CarouselSettings) -> impl IntoView {
    let initial = Carousel::new(settings, projects.len());
    let (carousel, set_carousel) = signal(initial);
    let (hovered, set_hovered) = signal(false);
    let is_static = initial.is_static();

    if settings.autoplay && !is_static {
        web_sys::console::log_1(
            &format!(
                "[CAROUSEL] {} slides, autoplay every {}ms",
                initial.slide_count(),
                settings.autoplay_speed_ms
            )
            .into(),
        );
        let interval = Interval::new(settings.autoplay_speed_ms, move || {
            if settings.pause_on_hover && hovered.get_untracked() {
                return;
            }
            set_carousel.update(Carousel::next);
        });
        let interval = StoredValue::new_local(Some(interval));
        on_cleanup(move || {
            interval.try_update_value(|slot| drop(slot.take()));
        });
    }

    let titles: Vec<String> = projects.iter().map(|p| p.title.clone()).collect();
    let showing = move || {
        let names: Vec<&str> = carousel
            .get()
            .visible()
            .into_iter()
            .filter_map(|i| titles.get(i).map(String::as_str))
            .collect();
        format!("Showing {}", names.join(", "))
    };

    let slide_style = format!("flex: 0 0 {}%;", initial.slide_width_percent());
    let slides = initial
        .track()
        .into_iter()
        .filter_map(|i| projects.get(i).cloned())
        .map(|project| {
            view! {
                <div class="carousel-slide zoom-in" style=slide_style.clone()>
                    <ProjectCardView project=project />
                </div>
            }
        })
        .collect_view();

    let track_style = move || {
        format!(
            "transform: translateX({}%); transition: transform {}ms ease;",
            carousel.get().offset_percent(),
            settings.speed_ms
        )
    };

    view! {
        <div
            class="carousel"
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <p class="sr-only" aria-live="polite">{showing}</p>
            <div class="carousel-viewport">
                <div class="carousel-track" style=track_style>
                    {slides}
                </div>
            </div>

            {(!is_static).then(|| view! {
                <button
                    class="carousel-arrow prev"
                    aria-label="Previous"
                    disabled=move || !carousel.get().can_go_prev()
                    on:click=move |_| set_carousel.update(Carousel::prev)
                >
                    <Icon kind=IconKind::ChevronLeft size=24 />
                </button>
                <button
                    class="carousel-arrow next"
                    aria-label="Next"
                    disabled=move || !carousel.get().can_go_next()
                    on:click=move |_| set_carousel.update(Carousel::next)
                >
                    <Icon kind=IconKind::ChevronRight size=24 />
                </button>
            })}

            {settings.dots.then(|| view! {
                <ul class="carousel-dots">
                    {move || {
                        let current = carousel.get();
                        (0..current.dot_count())
                            .map(|dot| {
                                let class = if dot == current.active_dot() { "active" } else { "" };
                                view! {
                                    <li class=class>
                                        <button
                                            aria-label=format!("Go to slide {}", dot + 1)
                                            on:click=move |_| set_carousel.update(|c| c.go_to_dot(dot))
                                        ></button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            })}
        </div>
    }
}
