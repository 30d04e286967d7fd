//! Hero banner with deferred floating icons.

use leptos::prelude::*;

use super::{Icon, ICON_ARROW_RIGHT, ICON_BRAIN, ICON_MICROCHIP, ICON_NETWORK, ICON_ROBOT};
use crate::types::Brand;

/// A decorative icon floating around the hero.
struct FloatingIcon {
    path: &'static str,
    position: &'static str,
    motion: &'static str,
    duration_secs: u8,
}

const FLOATING_ICONS: [FloatingIcon; 4] = [
    FloatingIcon {
        path: ICON_BRAIN,
        position: "top: 10%; left: 5%;",
        motion: "float-y",
        duration_secs: 8,
    },
    FloatingIcon {
        path: ICON_ROBOT,
        position: "top: 20%; right: 8%;",
        motion: "float-x",
        duration_secs: 10,
    },
    FloatingIcon {
        path: ICON_MICROCHIP,
        position: "bottom: 15%; left: 10%;",
        motion: "float-y",
        duration_secs: 12,
    },
    FloatingIcon {
        path: ICON_NETWORK,
        position: "bottom: 20%; right: 5%;",
        motion: "float-x",
        duration_secs: 9,
    },
];

#[component]
pub fn Hero(
    brand: Brand,
    /// Logo image src
    logo: String,
    /// Page settled after mount; floating icons only exist once this is true
    #[prop(into)]
    loaded: Signal<bool>,
) -> impl IntoView {
    let logo_alt = format!("{}{} Logo", brand.name, brand.accent);

    view! {
        <section id="top" class="section hero">
            <div class="hero-bg"></div>
            <div class="hero-content">
                <div class="stagger" style="--stagger: 0">
                    <img class="hero-logo" src=logo alt=logo_alt />
                </div>
                <div class="stagger" style="--stagger: 1">
                    <h1 class="hero-title">
                        {brand.name}
                        <span class="gold">{brand.accent}</span>
                    </h1>
                </div>
                <div class="stagger" style="--stagger: 2">
                    <p class="hero-subtitle">
                        {brand.tagline_lead}
                        " "
                        <span class="gold">{brand.tagline_accent}</span>
                    </p>
                </div>
                <div class="stagger" style="--stagger: 3">
                    <p class="hero-description">{brand.hero_description}</p>
                </div>
                <div class="stagger" style="--stagger: 4">
                    <a href="#contact" class="btn-primary">
                        {brand.cta_label}
                        <Icon path=ICON_ARROW_RIGHT size="18" />
                    </a>
                </div>
            </div>
            <Show when=move || loaded.get()>
                {FLOATING_ICONS.iter().map(|icon| {
                    let class = format!("hero-icon {}", icon.motion);
                    let style = format!("{} --float-duration: {}s;", icon.position, icon.duration_secs);
                    view! {
                        <div class=class style=style>
                            <Icon path=icon.path size="64" />
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </Show>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn brand() -> Brand {
        Brand {
            name: "CABEZA".into(),
            accent: ".AI".into(),
            cta_label: "Start".into(),
            ..Default::default()
        }
    }

    fn render(loaded: bool) -> String {
        view! { <Hero brand=brand() logo="/logo.png".to_string() loaded=loaded /> }.to_html()
    }

    #[test]
    fn floating_icons_absent_before_load() {
        let html = render(false);
        assert!(!html.contains("hero-icon"));
        assert!(html.contains("hero-title"));
    }

    #[test]
    fn floating_icons_present_after_load() {
        let html = render(true);
        assert_eq!(html.matches("class=\"hero-icon ").count(), FLOATING_ICONS.len());
    }

    #[test]
    fn cta_targets_contact_section() {
        let html = render(false);
        assert!(html.contains("href=\"#contact\""));
        assert!(html.contains("CABEZA.AI Logo"));
    }
}
