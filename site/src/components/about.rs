//! About card: brand story beside a looping brain icon.

use leptos::prelude::*;

use super::{Icon, ICON_BRAIN, ICON_LIGHTBULB};
use crate::types::About as AboutCopy;

#[component]
pub fn About(about: AboutCopy) -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="about-flex">
                <div class="reveal">
                    <div class="about-icon-large">
                        <Icon path=ICON_BRAIN size="88" />
                    </div>
                </div>
                <article class="about-card reveal" style="--reveal-delay: 150ms">
                    <div class="about-accent"></div>
                    <Icon path=ICON_LIGHTBULB size="36" />
                    <h2 class="about-heading">{about.heading}</h2>
                    <p class="about-subheading">{about.subheading}</p>
                    {about.paragraphs.into_iter().map(|paragraph| view! {
                        <p class="about-text">{paragraph}</p>
                    }).collect::<Vec<_>>()}
                </article>
            </div>
        </section>
    }
}
