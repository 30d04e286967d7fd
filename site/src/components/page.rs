//! The full landing page body, shared by the WASM app and the static render.

use leptos::prelude::*;

use super::{About, Contact, CtaFooter, FaqSection, Footer, Header, Hero, Process, Services, Stats};
use crate::types::SiteContent;

/// Every section in page order.
#[component]
pub fn LandingPage(
    content: SiteContent,
    /// Decorative animation gate, see [`crate::state::LoadGate`]
    #[prop(into)]
    loaded: Signal<bool>,
    /// Copyright year
    year: i32,
) -> impl IntoView {
    let SiteContent {
        meta,
        brand,
        about,
        links,
        services,
        stats,
        process,
        faqs,
        ..
    } = content;
    let owner = brand.legal_name.clone();
    let scheduling_url = links.scheduling_url.clone();

    view! {
        <Header brand=brand.clone() />
        <main>
            <Hero brand=brand logo=meta.logo loaded=loaded />
            <About about=about />
            <Services services=services />
            <Stats stats=stats />
            <Process steps=process />
            <FaqSection faqs=faqs />
            <Contact links=links />
        </main>
        <CtaFooter scheduling_url=scheduling_url />
        <Footer owner=owner year=year />
    }
}
