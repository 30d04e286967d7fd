//! Global stylesheet element.

use leptos::prelude::*;

use crate::styles::SITE_CSS;

/// Inline `<style>` carrying [`SITE_CSS`]. Goes in `<head>` for the static
/// render and at the top of `<body>` in the WASM app.
#[component]
pub fn GlobalStyle() -> impl IntoView {
    view! { <style>{SITE_CSS}</style> }
}
