//! Content Models
//!
//! Display records deserialized from the embedded site content.

use serde::{Deserialize, Serialize};

/// Everything the page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub owner: Owner,
    pub links: Links,
    pub hero: Hero,
    pub about: About,
    pub services: Vec<ServiceCard>,
    pub projects: Vec<ProjectCard>,
    #[serde(default)]
    pub carousel: CarouselSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    /// Brand mark shown in the navigation bar
    pub initials: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub copyright_year: u16,
}

/// Social profile links (shown in hero, contact and footer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub background: Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub portrait: Image,
    /// Markdown
    pub bio: String,
    pub facts: Vec<AboutFact>,
}

/// Labelled line in the about section ("Location: Cape Town")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutFact {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub image: Image,
    pub tags: Vec<ProjectTag>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTag {
    pub label: String,
    pub color: TagColor,
}

/// Badge palette for project tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Blue,
    Green,
    Yellow,
    Purple,
    Red,
    Indigo,
}

impl TagColor {
    pub fn class(self) -> &'static str {
        match self {
            TagColor::Blue => "tag tag-blue",
            TagColor::Green => "tag tag-green",
            TagColor::Yellow => "tag tag-yellow",
            TagColor::Purple => "tag tag-purple",
            TagColor::Red => "tag tag-red",
            TagColor::Indigo => "tag tag-indigo",
        }
    }
}

/// Slider configuration for the projects carousel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub dots: bool,
    pub infinite: bool,
    /// Slide transition duration
    pub speed_ms: u32,
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
    pub autoplay: bool,
    pub autoplay_speed_ms: u32,
    pub pause_on_hover: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            dots: true,
            infinite: true,
            speed_ms: 500,
            slides_to_show: 2,
            slides_to_scroll: 1,
            autoplay: true,
            autoplay_speed_ms: 3000,
            pause_on_hover: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_color_from_json() {
        let tag: ProjectTag = serde_json::from_str(r#"{"label":"SQL","color":"purple"}"#).unwrap();
        assert_eq!(tag.color, TagColor::Purple);
        assert_eq!(tag.color.class(), "tag tag-purple");
    }

    #[test]
    fn test_carousel_partial_settings_use_defaults() {
        let settings: CarouselSettings = serde_json::from_str(r#"{"slides_to_show":3}"#).unwrap();
        assert_eq!(settings.slides_to_show, 3);
        assert_eq!(settings.speed_ms, 500);
        assert_eq!(settings.autoplay_speed_ms, 3000);
        assert!(settings.infinite);
    }
}
