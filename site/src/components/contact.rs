//! Contact section and closing call-to-action.

use leptos::prelude::*;

use super::{Icon, ICON_ENVELOPE, ICON_LINKEDIN};
use crate::types::Links;

/// Third-party destinations open in a new browsing context.
const EXTERNAL_REL: &str = "noopener noreferrer";

#[component]
pub fn Contact(links: Links) -> impl IntoView {
    let mailto = links.mailto();

    view! {
        <section id="contact" class="section section-alt">
            <h2 class="section-title reveal">"Contact Us"</h2>
            <p class="contact-text reveal" style="--reveal-delay: 200ms">
                "Ready to elevate your business with AI? Reach out to us!"
            </p>
            <div class="contact-actions reveal" style="--reveal-delay: 300ms">
                <a href=links.form_url class="btn-primary" target="_blank" rel=EXTERNAL_REL>
                    "Open Contact Form"
                </a>
                <a href=links.scheduling_url class="btn-outline" target="_blank" rel=EXTERNAL_REL>
                    "Schedule a Call"
                </a>
            </div>
            <div class="contact-links">
                <a href=mailto class="contact-link" target="_blank" rel=EXTERNAL_REL>
                    <Icon path=ICON_ENVELOPE size="22" />
                    {links.email}
                </a>
                <a href=links.linkedin_url class="contact-link" target="_blank" rel=EXTERNAL_REL>
                    <Icon path=ICON_LINKEDIN size="22" />
                    "LinkedIn"
                </a>
            </div>
        </section>
    }
}

/// Closing band pointing at the scheduling service.
#[component]
pub fn CtaFooter(scheduling_url: String) -> impl IntoView {
    view! {
        <footer class="cta-footer reveal">
            <h2 class="cta-headline">"Ready to start building smarter?"</h2>
            <p class="cta-subtext">"Let's explore what AI can do for your business."</p>
            <a href=scheduling_url class="cta-button" target="_blank" rel=EXTERNAL_REL>
                "Book a Free Discovery Call"
            </a>
        </footer>
    }
}

#[component]
pub fn Footer(
    /// Brand shown in the copyright line, e.g. `Cabeza.ai`
    owner: String,
    year: i32,
) -> impl IntoView {
    view! {
        <footer class="site-footer">
            {format!("\u{a9} {year} {owner}. All rights reserved.")}
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn links() -> Links {
        Links {
            form_url: "https://forms.example.com/f".into(),
            scheduling_url: "https://cal.example.com/acme".into(),
            email: "hello@example.com".into(),
            linkedin_url: "https://linkedin.com/company/acme".into(),
        }
    }

    #[test]
    fn external_links_open_in_new_context() {
        let html = view! { <Contact links=links() /> }.to_html();
        assert!(html.contains("href=\"https://forms.example.com/f\""));
        assert!(html.contains("href=\"https://cal.example.com/acme\""));
        assert!(html.contains("href=\"mailto:hello@example.com\""));
        assert_eq!(html.matches("target=\"_blank\"").count(), 4);
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 4);
    }

    #[test]
    fn contact_section_is_anchor_target() {
        let html = view! { <Contact links=links() /> }.to_html();
        assert!(html.contains("id=\"contact\""));
    }

    #[test]
    fn footer_carries_year_and_owner() {
        let html = view! { <Footer owner="Cabeza.ai".to_string() year=2026 /> }.to_html();
        assert!(html.contains("2026 Cabeza.ai. All rights reserved."));
    }

    #[test]
    fn cta_footer_books_a_call() {
        let url = links().scheduling_url;
        let html = view! { <CtaFooter scheduling_url=url /> }.to_html();
        assert!(html.contains("href=\"https://cal.example.com/acme\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("Book a Free Discovery Call"));
    }
}
