//! Site Content Loading
//!
//! The page content is authored in `content/site.json`, embedded into the
//! binary at compile time and checked before anything is rendered.

use url::Url;

use crate::error::{ContentError, Result};
use crate::models::SiteContent;

const SITE_JSON: &str = include_str!("../content/site.json");

impl SiteContent {
    /// Parse and validate the embedded content
    pub fn load() -> Result<Self> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Every outbound link on the page as (field, url) pairs
    pub fn external_links(&self) -> Vec<(String, &str)> {
        let mut links = vec![
            ("links.github".to_string(), self.links.github.as_str()),
            ("links.linkedin".to_string(), self.links.linkedin.as_str()),
        ];
        for (i, project) in self.projects.iter().enumerate() {
            links.push((format!("projects[{}].link", i), project.link.as_str()));
        }
        links
    }

    fn validate(&self) -> Result<()> {
        require("owner.name", &self.owner.name)?;
        require("owner.initials", &self.owner.initials)?;
        require("owner.email", &self.owner.email)?;
        require("about.bio", &self.about.bio)?;

        for (field, link) in self.external_links() {
            validate_url(&field, link)?;
        }

        for (i, service) in self.services.iter().enumerate() {
            require(&format!("services[{}].title", i), &service.title)?;
        }
        for (i, project) in self.projects.iter().enumerate() {
            require(&format!("projects[{}].title", i), &project.title)?;
            require(&format!("projects[{}].image.src", i), &project.image.src)?;
        }

        let carousel = &self.carousel;
        if carousel.slides_to_show == 0 || carousel.slides_to_scroll == 0 {
            return Err(ContentError::InvalidCarousel {
                reason: "slides_to_show and slides_to_scroll must be at least 1".to_string(),
            });
        }
        if carousel.autoplay && carousel.autoplay_speed_ms == 0 {
            return Err(ContentError::InvalidCarousel {
                reason: "autoplay_speed_ms must be positive when autoplay is on".to_string(),
            });
        }
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Outbound links must be absolute http(s) URLs with a host
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    let invalid = |reason: String| ContentError::InvalidLink {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason,
    };

    let url = Url::parse(url_str).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(invalid(format!("Unsupported URL scheme: {}", scheme))),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("URL has no host".to_string()));
    }
    Ok(())
}
