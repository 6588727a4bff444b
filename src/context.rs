//! Site Context
//!
//! Loaded content shared with every section via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::models::SiteContent;

/// Read-only content provided by the root component
#[derive(Clone)]
pub struct SiteContext {
    content: Arc<SiteContent>,
}

impl SiteContext {
    pub fn new(content: SiteContent) -> Self {
        Self {
            content: Arc::new(content),
        }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }
}

/// Get the site content from context
pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}
