//! # cabeza-site
//!
//! The Cabeza.ai landing page as Leptos components.
//!
//! The same component tree is used two ways:
//!
//! - the `cabeza-landing` WASM app mounts [`components::LandingPage`] in the
//!   browser and drives the interactive bits (menu, FAQ, reveal, timers),
//! - [`render_page`] renders it to a complete static HTML document for
//!   search engines and visitors without JavaScript.
//!
//! ## Quick Start
//!
//! ```rust
//! use cabeza_site::{render_page, types::SiteContent};
//!
//! let content = SiteContent::embedded().unwrap();
//! let html = render_page(&content, 2026);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content descriptors (services, process steps, FAQs, ...)
//! - [`content`] - embedded TOML content, loading and validation
//! - [`state`] - interaction state (FAQ accordion, nav menu, load gate)
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`error`] - content errors
//!
//! ## Leptos 0.8 SSR
//!
//! Needs the `ssr` feature (enabled by the default `cli` feature).
//! Static output goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod error;
pub mod state;
pub mod styles;
pub mod types;

#[cfg(feature = "ssr")]
use components::SiteDocument;
#[cfg(feature = "ssr")]
use leptos::{prelude::*, reactive::owner::Owner, tachys::view::RenderHtml};
#[cfg(feature = "ssr")]
use types::SiteContent;

pub use error::ContentError;

/// Render the complete landing page as a static HTML document.
///
/// Interaction state is rendered in its initial form: menu closed, first
/// FAQ entries collapsed, decorative icons not yet mounted.
///
/// # Arguments
///
/// * `content` - page content, usually [`SiteContent::embedded`]
/// * `year` - year shown in the copyright footer
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
#[cfg(feature = "ssr")]
pub fn render_page(content: &SiteContent, year: i32) -> String {
    // Signals created while rendering are dropped with this owner
    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! { <SiteDocument content=content.clone() year=year /> };
        doc.to_html()
    });

    tracing::debug!(bytes = html.len(), "rendered landing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::types::{ChatWidget, Faq, ProcessStep, Service};

    fn content() -> SiteContent {
        SiteContent::embedded().expect("embedded content")
    }

    #[test]
    fn renders_complete_document() {
        let html = render_page(&content(), 2026);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<style>"));
        assert!(html.contains("id=\"contact\""));
    }

    #[test]
    fn head_carries_search_metadata() {
        let content = content();
        let html = render_page(&content, 2026);

        assert!(html.contains(&format!("<title>{}</title>", content.meta.title)));
        assert!(html.contains("name=\"description\""));
        assert!(html.contains("name=\"keywords\" content=\"AI consulting, AI automation"));
        assert!(html.contains("property=\"og:type\""));
        assert!(html.contains("content=\"website\""));
        assert!(html.contains("property=\"og:title\""));
        assert!(html.contains("property=\"og:description\""));
        assert!(html.contains("rel=\"icon\" href=\"/favicon.ico\""));
    }

    #[test]
    fn renders_one_card_per_descriptor_in_order() {
        let mut content = content();
        content.services = (0..5)
            .map(|i| Service {
                title: format!("Service {i}"),
                description: "d".into(),
                ..Default::default()
            })
            .collect();
        content.process = (0..4)
            .map(|i| ProcessStep {
                step: format!("{i}"),
                title: format!("Step {i}"),
                description: "d".into(),
            })
            .collect();
        let html = render_page(&content, 2026);

        assert_eq!(html.matches("class=\"service-card reveal\"").count(), 5);
        assert_eq!(html.matches("class=\"process-card reveal\"").count(), 4);

        let positions: Vec<_> = (0..5)
            .map(|i| html.find(&format!("Service {i}<")).expect("service rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn faq_preview_in_static_render() {
        let mut content = content();
        content.faqs = (0..7)
            .map(|i| Faq {
                question: format!("Q{i}"),
                answer: "A".into(),
                details: vec![],
            })
            .collect();
        let html = render_page(&content, 2026);

        assert_eq!(html.matches("class=\"faq-question\"").count(), 3);
        assert!(html.contains("Show all 7 questions"));
    }

    #[test]
    fn static_render_has_no_decorations_and_closed_menu() {
        let html = render_page(&content(), 2026);

        assert!(!html.contains("class=\"hero-icon "));
        assert!(html.contains("class=\"nav-links\""));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn chat_embed_only_when_configured() {
        let mut content = content();
        content.chat = Some(ChatWidget {
            script_src: "https://chat.example.com/embed.js".into(),
            site_id: "site-42".into(),
        });
        let html = render_page(&content, 2026);
        assert!(html.contains("src=\"https://chat.example.com/embed.js\""));
        assert!(html.contains("data-site-id=\"site-42\""));

        content.chat = None;
        let html = render_page(&content, 2026);
        assert!(!html.contains("data-site-id"));
    }

    #[test]
    fn footer_uses_given_year() {
        let html = render_page(&content(), 2031);
        assert!(html.contains("2031 Cabeza.ai. All rights reserved."));
    }
}
