//! Content descriptors for the landing page.
//!
//! Every repeated block on the page (service cards, stats, process steps,
//! FAQ entries) is driven by one of these records. They're designed to be:
//!
//! - **Deserializable** - authored in TOML, loaded via serde
//! - **Clone-friendly** - components take owned copies without borrowing issues
//! - **Static** - nothing here changes after the page mounts
//!
//! # Example
//!
//! ```rust
//! use cabeza_site::types::{Faq, ProcessStep};
//!
//! let step = ProcessStep {
//!     step: "01".into(),
//!     title: "Discover".into(),
//!     description: "Understand your business.".into(),
//! };
//! let faq = Faq {
//!     question: "Do you offer workshops?".into(),
//!     answer: "Yes.".into(),
//!     details: vec![],
//! };
//! assert_eq!(step.title, "Discover");
//! assert!(faq.details.is_empty());
//! ```

use serde::{Deserialize, Serialize};

/// Complete page content: metadata, brand copy and every repeated block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    /// Head metadata for search engines
    pub meta: SiteMeta,
    /// Brand name and hero copy
    pub brand: Brand,
    /// About card copy
    pub about: About,
    /// Outbound links
    pub links: Links,
    /// Third-party chat embed; `None` disables it
    pub chat: Option<ChatWidget>,
    /// Service cards, in display order
    pub services: Vec<Service>,
    /// Stat counters, in display order
    pub stats: Vec<Stat>,
    /// Process steps, in display order
    pub process: Vec<ProcessStep>,
    /// FAQ entries, in display order
    pub faqs: Vec<Faq>,
}

/// `<head>` metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// Document title
    pub title: String,
    /// Meta description (also used for Open Graph)
    pub description: String,
    /// Meta keywords, joined with `, `
    pub keywords: Vec<String>,
    /// Favicon href
    pub favicon: String,
    /// Logo image src
    pub logo: String,
}

impl SiteMeta {
    /// Keywords in the comma-separated form used by `<meta name="keywords">`.
    pub fn keywords_attr(&self) -> String {
        self.keywords.join(", ")
    }
}

/// Brand name and hero copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    /// Wordmark, e.g. `CABEZA`
    pub name: String,
    /// Highlighted wordmark suffix, e.g. `.AI`
    pub accent: String,
    /// Name used in the copyright line, e.g. `Cabeza.ai`
    pub legal_name: String,
    /// Plain part of the tagline
    pub tagline_lead: String,
    /// Highlighted part of the tagline
    pub tagline_accent: String,
    /// Paragraph under the tagline
    pub hero_description: String,
    /// Hero call-to-action label
    pub cta_label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub heading: String,
    pub subheading: String,
    pub paragraphs: Vec<String>,
}

/// Outbound links. Form and scheduling links open in a new browsing context.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    /// Hosted contact form
    pub form_url: String,
    /// Scheduling service for discovery calls
    pub scheduling_url: String,
    /// Contact address, rendered as a `mailto:` link
    pub email: String,
    /// Company profile
    pub linkedin_url: String,
}

impl Links {
    /// `mailto:` href for the contact address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Third-party chat embed, keyed by a static site identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatWidget {
    /// Script URL injected into the page
    pub script_src: String,
    /// Site identifier passed as `data-site-id`
    pub site_id: String,
}

/// Icon shown on a service card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceIcon {
    #[default]
    GraduationCap,
    Handshake,
    Code,
    Lightbulb,
    Robot,
}

/// One service card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub icon: ServiceIcon,
    pub title: String,
    pub description: String,
    /// Bullet list under the description
    #[serde(default)]
    pub features: Vec<String>,
}

/// One stat counter, e.g. `500+ / AI Workflows Built`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// One step of the process explainer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    /// Step label, e.g. `01`
    pub step: String,
    pub title: String,
    pub description: String,
}

/// One FAQ entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
    /// Optional bullet list shown under the answer
    #[serde(default)]
    pub details: Vec<String>,
}
