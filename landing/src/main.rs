// Cabeza.ai Landing Page — Leptos 0.8 Edition
// Client-side entry: mounts the shared component tree and wires the timers.

mod behaviors;

use behaviors::PageBehaviors;
use cabeza_site::components::{GlobalStyle, LandingPage};
use cabeza_site::state::LoadGate;
use cabeza_site::types::SiteContent;
use chrono::Datelike;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    behaviors::mark_scripted();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let content = match SiteContent::embedded() {
        Ok(content) => content,
        Err(err) => {
            tracing::error!(%err, "embedded content rejected, nothing to mount");
            return ().into_any();
        }
    };

    // Decorative icons mount shortly after first paint
    let gate = RwSignal::new(LoadGate::default());
    let loaded = Signal::derive(move || gate.with(LoadGate::is_loaded));
    match set_timeout_with_handle(move || gate.update(LoadGate::mark_loaded), LoadGate::DELAY) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => {
            tracing::warn!(?err, "load timer unavailable, showing decorations now");
            gate.update(LoadGate::mark_loaded);
        }
    }

    let year = chrono::Local::now().year();
    let chat = content.chat.clone();
    tracing::info!(
        services = content.services.len(),
        faqs = content.faqs.len(),
        "mounting landing page"
    );

    view! {
        <GlobalStyle />
        <LandingPage content=content loaded=loaded year=year />
        <PageBehaviors chat=chat />
    }
    .into_any()
}
