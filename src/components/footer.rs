//! Footer Component

use leptos::prelude::*;

use crate::components::social_links::SocialIcons;
use crate::context::use_site;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let content = site.content();
    let links = content.links.clone();
    let copyright = format!(
        "© {} {}. All rights reserved.",
        content.owner.copyright_year, content.owner.name
    );

    view! {
        <footer class="footer">
            <div class="container narrow centered">
                <SocialIcons links=links size=20 class="footer-social" />
                <p class="copyright">{copyright}</p>
            </div>
        </footer>
    }
}
