//! Interaction state for the page.
//!
//! Plain structs with no reactive or DOM dependencies. Components wrap them
//! in `RwSignal`s; the browser app drives the timers and listeners.

use std::collections::BTreeSet;
use std::time::Duration;

/// Number of FAQ entries shown before "show more" is activated.
pub const FAQ_PREVIEW: usize = 3;

/// Expand/collapse state of the FAQ accordion.
///
/// Multi-select: any number of entries may be open at the same time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    expanded: BTreeSet<usize>,
    show_all: bool,
}

impl FaqAccordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `index` in the expanded set of a list of `total` entries.
    /// Returns whether it is now expanded; indices past the list are ignored.
    pub fn toggle(&mut self, index: usize, total: usize) -> bool {
        if index >= total {
            return false;
        }
        if self.expanded.remove(&index) {
            false
        } else {
            self.expanded.insert(index);
            true
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Expanded indices in ascending order.
    pub fn expanded(&self) -> impl Iterator<Item = usize> + '_ {
        self.expanded.iter().copied()
    }

    /// Reveal every entry. There is no way back to the preview.
    pub fn show_all(&mut self) {
        self.show_all = true;
    }

    pub fn is_showing_all(&self) -> bool {
        self.show_all
    }

    /// How many of `total` entries are rendered.
    pub fn visible_count(&self, total: usize) -> usize {
        if self.show_all {
            total
        } else {
            total.min(FAQ_PREVIEW)
        }
    }

    /// Whether the "show more" control should be rendered.
    pub fn has_more(&self, total: usize) -> bool {
        self.visible_count(total) < total
    }
}

/// Responsive navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A nav link was followed; the panel always closes.
    pub fn select_link(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Gate for decorative animation.
///
/// Floating hero icons only mount once the page had [`LoadGate::DELAY`] to
/// settle after mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadGate {
    loaded: bool,
}

impl LoadGate {
    pub const DELAY: Duration = Duration::from_millis(100);

    /// Timer elapsed.
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// Nudge idle visitors towards the contact section.
///
/// If nothing scrolled the page within [`ScrollNudge::DELAY`] of mount, the
/// contact section is scrolled into view once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollNudge {
    scrolled: bool,
}

impl ScrollNudge {
    pub const DELAY: Duration = Duration::from_secs(5);

    /// Record a scroll event at vertical `offset` (pixels from the top).
    /// Returns `true` the first time the visitor has actually scrolled, so the
    /// caller can drop its listener.
    pub fn record_scroll(&mut self, offset: f64) -> bool {
        if self.scrolled || offset <= 0.0 {
            return false;
        }
        self.scrolled = true;
        true
    }

    pub fn has_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Checked when the delay elapses.
    pub fn should_nudge(&self) -> bool {
        !self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn faq_toggle_twice_is_identity() {
        let mut faq = FaqAccordion::new();
        faq.toggle(4, 6);
        let before = faq.clone();

        assert!(faq.toggle(1, 6));
        assert!(!faq.toggle(1, 6));

        assert_eq!(faq, before);
    }

    #[test]
    fn faq_toggle_past_the_list_is_ignored() {
        let mut faq = FaqAccordion::new();
        faq.toggle(2, 6);
        let before = faq.clone();

        assert!(!faq.toggle(99, 6));
        assert!(!faq.toggle(6, 6));
        assert!(!faq.is_expanded(99));
        assert!(!faq.is_expanded(6));
        assert_eq!(faq.expanded().collect::<Vec<_>>(), vec![2]);
        assert_eq!(faq, before);
    }

    #[test]
    fn faq_toggle_on_empty_list_is_ignored() {
        let mut faq = FaqAccordion::new();
        assert!(!faq.toggle(0, 0));
        assert_eq!(faq.expanded().count(), 0);
    }

    #[test]
    fn faq_allows_multiple_open_entries() {
        let mut faq = FaqAccordion::new();
        faq.toggle(2, 6);
        faq.toggle(0, 6);
        faq.toggle(5, 6);

        assert_eq!(faq.expanded().collect::<Vec<_>>(), vec![0, 2, 5]);
        assert!(faq.is_expanded(0));
        assert!(!faq.is_expanded(1));
    }

    #[test]
    fn faq_previews_first_three() {
        let faq = FaqAccordion::new();
        assert_eq!(faq.visible_count(6), 3);
        assert!(faq.has_more(6));
    }

    #[test]
    fn faq_show_all_reveals_everything() {
        let mut faq = FaqAccordion::new();
        faq.show_all();
        assert_eq!(faq.visible_count(6), 6);
        assert!(!faq.has_more(6));
        assert!(faq.is_showing_all());
    }

    #[test]
    fn faq_short_list_has_no_more_control() {
        let faq = FaqAccordion::new();
        assert_eq!(faq.visible_count(2), 2);
        assert!(!faq.has_more(2));
        assert!(!faq.has_more(FAQ_PREVIEW));
        assert_eq!(faq.visible_count(0), 0);
    }

    #[test]
    fn faq_show_all_keeps_expanded_entries() {
        let mut faq = FaqAccordion::new();
        faq.toggle(1, 6);
        faq.show_all();
        assert!(faq.is_expanded(1));
    }

    #[test]
    fn nav_link_closes_open_menu() {
        let mut nav = NavMenu::default();
        nav.toggle();
        assert!(nav.is_open());

        nav.select_link();
        assert!(!nav.is_open());
    }

    #[test]
    fn nav_link_on_closed_menu_stays_closed() {
        let mut nav = NavMenu::default();
        nav.select_link();
        assert!(!nav.is_open());
    }

    #[test]
    fn nav_toggle_flips() {
        let mut nav = NavMenu::default();
        nav.toggle();
        nav.toggle();
        assert!(!nav.is_open());
    }

    #[test]
    fn load_gate_starts_closed() {
        let mut gate = LoadGate::default();
        assert!(!gate.is_loaded());
        gate.mark_loaded();
        assert!(gate.is_loaded());
        assert_eq!(LoadGate::DELAY, Duration::from_millis(100));
    }

    #[test]
    fn nudge_fires_without_scroll() {
        let nudge = ScrollNudge::default();
        assert!(nudge.should_nudge());
    }

    #[test]
    fn nudge_cancelled_by_first_real_scroll() {
        let mut nudge = ScrollNudge::default();
        assert!(!nudge.record_scroll(0.0), "offset 0 is not a scroll");
        assert!(nudge.should_nudge());

        assert!(nudge.record_scroll(120.0));
        assert!(!nudge.record_scroll(240.0), "only the first scroll reports");
        assert!(nudge.has_scrolled());
        assert!(!nudge.should_nudge());
    }
}
