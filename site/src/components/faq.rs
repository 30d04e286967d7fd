//! FAQ accordion.
//!
//! Shows the first [`FAQ_PREVIEW`](crate::state::FAQ_PREVIEW) entries until
//! "show more" is activated. Any number of entries may be open at once.

use leptos::prelude::*;

use super::{Icon, ICON_CARET_DOWN};
use crate::state::FaqAccordion;
use crate::types::Faq;

#[component]
pub fn FaqSection(
    faqs: Vec<Faq>,
    /// Initial accordion state
    #[prop(optional)]
    accordion: FaqAccordion,
) -> impl IntoView {
    let state = RwSignal::new(accordion);
    let total = faqs.len();
    // Only re-render the list when the number of visible rows changes,
    // not on every expand/collapse.
    let visible = Memo::new(move |_| state.with(|s| s.visible_count(total)));

    view! {
        <section id="faq" class="section">
            <h2 class="section-title reveal">"Frequently Asked Questions"</h2>
            <p class="section-subtitle reveal">
                "Everything you want to know before the first call"
            </p>
            <div class="faq-list">
                {move || {
                    faqs.iter()
                        .take(visible.get())
                        .cloned()
                        .enumerate()
                        .map(|(idx, faq)| view! { <FaqItem index=idx total=total faq=faq state=state /> })
                        .collect::<Vec<_>>()
                }}
            </div>
            <Show when=move || state.with(|s| s.has_more(total))>
                <button class="faq-more" on:click=move |_| state.update(|s| s.show_all())>
                    {format!("Show all {total} questions")}
                </button>
            </Show>
        </section>
    }
}

#[component]
fn FaqItem(
    index: usize,
    total: usize,
    faq: Faq,
    state: RwSignal<FaqAccordion>,
) -> impl IntoView {
    let is_open = move || state.with(|s| s.is_expanded(index));
    let answer_id = format!("faq-answer-{index}");
    let controls = answer_id.clone();
    let details = faq.details;

    view! {
        <div class="faq-item" class:open=is_open>
            <button
                class="faq-question"
                aria-expanded=move || is_open().to_string()
                aria-controls=controls
                on:click=move |_| {
                    state.update(|s| {
                        s.toggle(index, total);
                    })
                }
            >
                <span>{faq.question}</span>
                <Icon path=ICON_CARET_DOWN size="18" class="faq-caret" />
            </button>
            <div id=answer_id class="faq-answer" role="region">
                <div class="faq-answer-inner">
                    <p>{faq.answer}</p>
                    {(!details.is_empty()).then(|| view! {
                        <ul class="faq-details">
                            {details.into_iter().map(|detail| view! { <li>{detail}</li> }).collect::<Vec<_>>()}
                        </ul>
                    })}
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn faqs(n: usize) -> Vec<Faq> {
        (0..n)
            .map(|i| Faq {
                question: format!("Question {i}?"),
                answer: format!("Answer {i}."),
                details: vec![],
            })
            .collect()
    }

    fn render(faqs: Vec<Faq>, accordion: FaqAccordion) -> String {
        view! { <FaqSection faqs=faqs accordion=accordion /> }.to_html()
    }

    #[test]
    fn renders_three_entries_initially() {
        let html = render(faqs(6), FaqAccordion::new());
        assert_eq!(html.matches("class=\"faq-question\"").count(), 3);
        assert!(html.contains("Question 2?"));
        assert!(!html.contains("Question 3?"));
        assert!(html.contains("faq-more"));
    }

    #[test]
    fn show_all_renders_every_entry_and_drops_control() {
        let mut accordion = FaqAccordion::new();
        accordion.show_all();
        let html = render(faqs(6), accordion);
        assert_eq!(html.matches("class=\"faq-question\"").count(), 6);
        assert!(!html.contains("faq-more"));
    }

    #[test]
    fn entries_keep_input_order() {
        let mut accordion = FaqAccordion::new();
        accordion.show_all();
        let html = render(faqs(5), accordion);
        let positions: Vec<_> = (0..5)
            .map(|i| html.find(&format!("Question {i}?")).expect("question rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn short_list_has_no_show_more() {
        let html = render(faqs(2), FaqAccordion::new());
        assert_eq!(html.matches("class=\"faq-question\"").count(), 2);
        assert!(!html.contains("faq-more"));
    }

    #[test]
    fn expanded_entries_are_marked_open() {
        let mut accordion = FaqAccordion::new();
        accordion.toggle(1, 3);
        let html = render(faqs(3), accordion);
        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
        assert_eq!(html.matches("aria-expanded=\"false\"").count(), 2);
        assert!(html.contains("faq-item open"));
    }

    #[test]
    fn details_render_only_when_present() {
        let mut entries = faqs(2);
        entries[1].details = vec!["first".into(), "second".into()];
        let html = render(entries, FaqAccordion::new());
        assert_eq!(html.matches("class=\"faq-details\"").count(), 1);
        assert!(html.contains("<li>second</li>"));
    }
}
