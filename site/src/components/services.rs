//! Services grid.

use leptos::prelude::*;

use super::{reveal_delay, Icon};
use crate::types::Service;

#[component]
pub fn Services(services: Vec<Service>) -> impl IntoView {
    view! {
        <section id="services" class="section">
            <h2 class="section-title reveal">"Our Services"</h2>
            <p class="section-subtitle reveal">
                "Comprehensive AI solutions designed to transform how you think and work"
            </p>
            <div class="services-grid">
                {services.into_iter().enumerate().map(|(idx, service)| view! {
                    <ServiceCard service=service index=idx />
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service, index: usize) -> impl IntoView {
    view! {
        <article class="service-card reveal" style=reveal_delay(index)>
            <div class="service-icon">
                <Icon path=service.icon.path() size="36" />
            </div>
            <h3 class="service-title">{service.title}</h3>
            <p class="service-desc">{service.description}</p>
            <ul class="service-features">
                {service.features.into_iter().map(|feature| view! {
                    <li class="service-feature">{feature}</li>
                }).collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
