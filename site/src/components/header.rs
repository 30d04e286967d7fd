//! Site header with the responsive navigation toggle.

use leptos::prelude::*;

use super::{Icon, ICON_LIST, ICON_X};
use crate::state::NavMenu;
use crate::types::Brand;

/// In-page anchors, in display order.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#services", "Services"),
    ("#process", "Process"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header(
    brand: Brand,
    /// Initial menu state, closed by default
    #[prop(optional)]
    menu: NavMenu,
) -> impl IntoView {
    let menu = RwSignal::new(menu);
    let is_open = move || menu.with(|m| m.is_open());

    view! {
        <header class="site-header">
            <a href="#top" class="header-brand">
                {brand.name}
                <span class="gold">{brand.accent}</span>
            </a>
            <button
                class="nav-toggle"
                aria-controls="site-nav"
                aria-expanded=move || is_open().to_string()
                aria-label=move || if is_open() { "Close menu" } else { "Open menu" }
                on:click=move |_| menu.update(|m| m.toggle())
            >
                {move || if is_open() {
                    view! { <Icon path=ICON_X size="22" /> }
                } else {
                    view! { <Icon path=ICON_LIST size="22" /> }
                }}
            </button>
            <nav id="site-nav" class="nav-links" class:open=is_open>
                {NAV_LINKS.into_iter().map(|(href, label)| view! {
                    <a href=href class="nav-link" on:click=move |_| menu.update(|m| m.select_link())>
                        {label}
                    </a>
                }).collect::<Vec<_>>()}
            </nav>
        </header>
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
            ..Default::default()
        }
    }

    fn render(menu: NavMenu) -> String {
        view! { <Header brand=brand() menu=menu /> }.to_html()
    }

    fn opened() -> NavMenu {
        let mut menu = NavMenu::default();
        menu.toggle();
        menu
    }

    #[test]
    fn closed_by_default() {
        let html = view! { <Header brand=brand() /> }.to_html();
        assert!(html.contains("class=\"nav-links\""));
        assert!(!html.contains("nav-links open"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("aria-label=\"Open menu\""));
        assert!(html.contains(ICON_LIST));
        assert!(!html.contains(ICON_X));
    }

    #[test]
    fn open_menu_marks_nav_and_toggle() {
        let html = render(opened());
        assert!(html.contains("nav-links open"));
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains("aria-label=\"Close menu\""));
        assert!(html.contains(ICON_X));
        assert!(!html.contains(ICON_LIST));
    }

    #[test]
    fn selecting_a_link_renders_closed_menu() {
        let mut menu = opened();
        menu.select_link();
        let html = render(menu);
        assert!(!html.contains("nav-links open"));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn renders_every_nav_link_in_order() {
        let html = render(NavMenu::default());
        assert_eq!(html.matches("class=\"nav-link\"").count(), NAV_LINKS.len());
        let positions: Vec<_> = NAV_LINKS
            .iter()
            .map(|(href, _)| html.find(&format!("href=\"{href}\"")).expect("link rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("aria-controls=\"site-nav\""));
    }
}
