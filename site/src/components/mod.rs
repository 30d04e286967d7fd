//! Leptos UI components for the landing page.
//!
//! Every component takes owned content descriptors and keeps its own
//! interaction state in signals. The same tree renders in the browser
//! (client-side, interactive) and to a static HTML string.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (static render only)
//! ├── GlobalStyle
//! ├── LandingPage
//! │   ├── Header      (NavMenu)
//! │   ├── Hero        (loaded gate -> floating icons)
//! │   ├── About
//! │   ├── Services
//! │   ├── Stats
//! │   ├── Process
//! │   ├── FaqSection  (FaqAccordion)
//! │   ├── Contact
//! │   ├── CtaFooter
//! │   └── Footer
//! └── ChatEmbed
//! ```
//!
//! # Reveal on scroll
//!
//! Elements carrying the `reveal` class are picked up by the browser app,
//! which adds `is-visible` once they intersect the viewport.

mod about;
mod contact;
mod document;
mod faq;
mod global_style;
mod header;
mod hero;
mod icons;
mod page;
mod process;
mod services;
mod stats;

pub use about::About;
pub use contact::{Contact, CtaFooter, Footer};
pub use document::{ChatEmbed, SiteDocument};
pub use faq::FaqSection;
pub use global_style::GlobalStyle;
pub use header::{Header, NAV_LINKS};
pub use hero::Hero;
pub use icons::*;
pub use page::LandingPage;
pub use process::Process;
pub use services::Services;
pub use stats::Stats;

/// Class added to reveal targets once they entered the viewport.
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";

/// Selector for every reveal target on the page.
pub const REVEAL_SELECTOR: &str = ".reveal";

/// Inline style staggering the reveal of the `index`-th item in a grid.
pub(crate) fn reveal_delay(index: usize) -> String {
    format!("--reveal-delay: {}ms", index * 150)
}
