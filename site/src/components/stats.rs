//! Headline numbers shown between the services and process sections.

use leptos::prelude::*;

use super::reveal_delay;
use crate::types::Stat;

/// Stat counters band. Renders nothing when there are no stats.
#[component]
pub fn Stats(stats: Vec<Stat>) -> impl IntoView {
    (!stats.is_empty()).then(|| {
        view! {
            <section class="section section-alt">
                <div class="stats-grid">
                    {stats.into_iter().enumerate().map(|(idx, stat)| view! {
                        <div class="stat-card reveal" style=reveal_delay(idx)>
                            <div class="stat-number">{stat.value}</div>
                            <p class="stat-label">{stat.label}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </section>
        }
    })
}
