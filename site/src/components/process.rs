//! "How we work" process grid.

use leptos::prelude::*;

use super::reveal_delay;
use crate::types::ProcessStep;

#[component]
pub fn Process(steps: Vec<ProcessStep>) -> impl IntoView {
    view! {
        <section id="process" class="section section-alt">
            <h2 class="section-title reveal">"How We Work"</h2>
            <div class="process-grid">
                {steps.into_iter().enumerate().map(|(idx, step)| view! {
                    <div class="process-card reveal" style=reveal_delay(idx)>
                        <div class="process-step">{step.step}</div>
                        <h3 class="process-title">{step.title}</h3>
                        <p class="process-desc">{step.description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
