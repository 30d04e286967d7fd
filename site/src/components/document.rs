//! Root document component - the complete HTML page.

use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::custom_attribute;

use super::{GlobalStyle, LandingPage};
use crate::types::{ChatWidget, SiteContent};

/// The complete HTML document: head metadata, inline styles, page body and
/// the optional chat embed.
#[component]
pub fn SiteDocument(
    content: SiteContent,
    /// Copyright year
    year: i32,
) -> impl IntoView {
    let meta = content.meta.clone();
    let keywords = meta.keywords_attr();
    let chat = content.chat.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{meta.title.clone()}</title>
                <meta name="description" content=meta.description.clone() />
                <meta name="keywords" content=keywords />
                <meta {custom_attribute("property", "og:type")} content="website" />
                <meta {custom_attribute("property", "og:title")} content=meta.title />
                <meta {custom_attribute("property", "og:description")} content=meta.description />
                <link rel="icon" href=meta.favicon />
                <GlobalStyle />
            </head>
            <body>
                // Static render: decorations stay unmounted, there is no timer
                <LandingPage content=content loaded=false year=year />
                {chat.map(|chat| view! { <ChatEmbed chat=chat /> })}
            </body>
        </html>
    }
}

/// `<script>` tag for the third-party chat widget.
#[component]
pub fn ChatEmbed(chat: ChatWidget) -> impl IntoView {
    view! {
        <script
            src=chat.script_src
            data-site-id=chat.site_id
            defer=true
        ></script>
    }
}
