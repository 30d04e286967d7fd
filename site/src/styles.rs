//! CSS for the landing page.
//!
//! One stylesheet shared by the WASM app and the static renderer, injected
//! inline through [`crate::components::GlobalStyle`].
//!
//! # Customization
//!
//! ```rust
//! use cabeza_site::styles::SITE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.ends_with("}"));
//! ```
//!
//! # Notes
//!
//! - Reveal-on-scroll only hides `.reveal` elements under `html.js`, so the
//!   static render stays readable without the WASM app.
//! - No `&`, `<` or `>` anywhere: the sheet is emitted as escaped text.

/// Complete stylesheet - dark indigo theme with violet/pink accents.
pub const SITE_CSS: &str = r#"
:root {
    --bg-deep: #0a0a0f;
    --bg-panel: #0f0f1a;
    --bg-card: #1a1a2e;
    --bg-navy: #16213e;
    --bg-blue: #0f3460;
    --text-bright: #ffffff;
    --text-soft: #a8b2d1;
    --text-dim: #8892b0;
    --accent-violet: #7877c6;
    --accent-pink: #ff77c6;
    --accent-gold: #ffd700;
    --accent-gold-soft: #ffed4e;
    --border-soft: rgba(120, 119, 198, 0.2);
    --border-strong: rgba(120, 119, 198, 0.4);
    --font-body: 'Inter', Arial, sans-serif;
    --font-display: 'Montserrat', 'Inter', Arial, sans-serif;
    --container-max: 1200px;
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    font-family: var(--font-body);
    font-weight: 400;
    background: var(--bg-deep);
    color: var(--text-bright);
    line-height: 1.5;
}

h1, h2, h3, h4, h5, h6 {
    font-family: var(--font-display);
    font-weight: 700;
    letter-spacing: 0.02em;
    margin: 0;
}

a { color: inherit; }

/* ---------- layout ---------- */

.section {
    padding: 6rem 1rem 5rem 1rem;
    background: var(--bg-deep);
    display: flex;
    flex-direction: column;
    align-items: center;
    position: relative;
}

.section-alt { background: var(--bg-panel); }

.section-title {
    font-size: clamp(2rem, 6vw, 3rem);
    font-weight: 800;
    margin-bottom: 1rem;
    text-align: center;
    background: linear-gradient(135deg, #fff 0%, var(--accent-violet) 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
}

.section-subtitle {
    font-size: 1.2rem;
    color: var(--text-soft);
    text-align: center;
    max-width: 600px;
    margin: 0 0 3rem 0;
    line-height: 1.6;
}

/* ---------- header ---------- */

.site-header {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1.5rem 2rem;
}

.header-brand {
    font-family: var(--font-display);
    font-weight: 900;
    letter-spacing: 0.1em;
    text-decoration: none;
}

.nav-toggle {
    display: none;
    background: transparent;
    border: 1px solid var(--border-strong);
    border-radius: 0.75rem;
    color: var(--text-soft);
    padding: 0.5rem 0.75rem;
    cursor: pointer;
}

.nav-links {
    display: flex;
    gap: 2rem;
}

.nav-link {
    color: var(--text-soft);
    font-weight: 600;
    font-size: 1.05rem;
    text-decoration: none;
    transition: color 0.2s;
}

.nav-link:hover { color: var(--accent-pink); }

@media (max-width: 720px) {
    .nav-toggle { display: inline-flex; }
    .nav-links {
        display: none;
        position: absolute;
        top: 100%;
        right: 1rem;
        flex-direction: column;
        gap: 1rem;
        padding: 1.5rem;
        background: rgba(15, 15, 26, 0.96);
        border: 1px solid var(--border-soft);
        border-radius: 1rem;
    }
    .nav-links.open { display: flex; }
}

/* ---------- hero ---------- */

@keyframes gradient-move {
    0% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
    100% { background-position: 0% 50%; }
}

@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(60px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes float-y {
    0%, 100% { transform: translateY(0) rotate(0deg); }
    50% { transform: translateY(-20px) rotate(5deg); }
}

@keyframes float-x {
    0%, 100% { transform: translateX(0) rotate(0deg); }
    50% { transform: translateX(15px) rotate(-5deg); }
}

@keyframes about-loop {
    0% { transform: translateY(0) scale(1); }
    20% { transform: translateY(-8px) scale(1.08); }
    40% { transform: translateY(0) scale(1); }
    60% { transform: translateY(-6px) scale(1.05); }
    100% { transform: translateY(0) scale(1); }
}

.hero {
    min-height: 100vh;
    padding: 0 1rem;
    justify-content: center;
    overflow: hidden;
}

.hero-bg {
    position: absolute;
    inset: 0;
    z-index: 0;
    background: linear-gradient(135deg, var(--bg-deep) 0%, var(--bg-card) 25%, var(--bg-navy) 50%, var(--bg-blue) 75%, #533483 100%);
    background-size: 400% 400%;
    animation: gradient-move 15s ease-in-out infinite;
    opacity: 0.8;
}

.hero-content {
    position: relative;
    z-index: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
    max-width: var(--container-max);
    width: 100%;
}

.hero-content .stagger {
    opacity: 0;
    animation: fade-in-up 0.8s ease-out forwards;
    animation-delay: calc(var(--stagger, 0) * 0.2s);
}

.hero-logo {
    width: 140px;
    height: 140px;
    margin-bottom: 2rem;
    border-radius: 2rem;
    box-shadow: 0 20px 60px rgba(120, 119, 198, 0.3);
    border: 3px solid var(--border-soft);
}

.hero-title {
    font-size: clamp(2.5rem, 8vw, 4.5rem);
    font-weight: 900;
    letter-spacing: 0.1em;
    margin-bottom: 1rem;
    background: linear-gradient(135deg, #fff 0%, var(--accent-violet) 50%, var(--accent-pink) 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
}

.gold {
    background: linear-gradient(135deg, var(--accent-gold) 0%, var(--accent-gold-soft) 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
}

.hero-subtitle {
    font-size: clamp(1.2rem, 4vw, 1.8rem);
    color: var(--text-soft);
    margin: 0 0 2rem 0;
    font-weight: 500;
    max-width: 600px;
    line-height: 1.4;
}

.hero-description {
    font-size: 1.1rem;
    color: var(--text-dim);
    margin: 0 0 3rem 0;
    max-width: 500px;
    line-height: 1.6;
}

.btn-primary {
    padding: 1.2rem 3rem;
    background: linear-gradient(135deg, var(--accent-violet) 0%, var(--accent-pink) 100%);
    color: #fff;
    font-weight: 700;
    font-size: 1.1rem;
    border-radius: 3rem;
    box-shadow: 0 10px 40px rgba(120, 119, 198, 0.4);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    text-decoration: none;
    cursor: pointer;
    border: none;
}

.btn-primary:hover {
    transform: translateY(-3px) scale(1.05);
    box-shadow: 0 20px 60px rgba(120, 119, 198, 0.6);
}

.btn-primary:active { transform: scale(0.95); }

.hero-icon {
    position: absolute;
    z-index: 0;
    opacity: 0.1;
    color: var(--accent-violet);
    pointer-events: none;
    width: 4rem;
    height: 4rem;
}

.hero-icon.float-y { animation: float-y var(--float-duration, 8s) ease-in-out infinite; }
.hero-icon.float-x { animation: float-x var(--float-duration, 8s) ease-in-out infinite; }

@media (max-width: 600px) {
    .hero-logo { width: 100px; height: 100px; }
    .hero-icon { width: 2.5rem; height: 2.5rem; }
}

/* ---------- about ---------- */

.about-flex {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 2.5rem;
    width: 100%;
    max-width: 900px;
}

.about-icon-large {
    color: var(--accent-violet);
    border-radius: 1.5rem;
    box-shadow: 0 4px 32px rgba(120, 119, 198, 0.1);
    background: rgba(26, 26, 46, 0.85);
    padding: 1.2rem 1.5rem;
    animation: about-loop 2.8s infinite cubic-bezier(0.4, 0.6, 0.6, 1);
    display: flex;
}

.about-card {
    background: rgba(26, 26, 46, 0.98);
    border-radius: 2rem;
    box-shadow: 0 8px 40px rgba(36, 36, 36, 0.18);
    padding: 3.5rem 2rem 2.5rem 2rem;
    max-width: 700px;
    display: flex;
    flex-direction: column;
    align-items: center;
    flex: 2 1 0;
}

.about-accent {
    width: 60px;
    height: 6px;
    border-radius: 3px;
    background: linear-gradient(90deg, var(--accent-violet) 0%, var(--accent-pink) 100%);
    margin-bottom: 1.5rem;
}

.about-heading {
    font-size: 2.1rem;
    font-weight: 900;
    margin-bottom: 0.7rem;
    text-align: center;
}

.about-subheading {
    font-size: 1.18rem;
    font-weight: 500;
    color: var(--accent-pink);
    margin: 0 0 1.2rem 0;
    text-align: center;
}

.about-text {
    font-size: 1.13rem;
    color: var(--text-soft);
    text-align: center;
    line-height: 1.7;
    max-width: 600px;
}

@media (min-width: 900px) {
    .about-flex { flex-direction: row; align-items: stretch; gap: 3.5rem; }
}

/* ---------- cards ---------- */

.services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 2rem;
    width: 100%;
    max-width: var(--container-max);
    margin-top: 2rem;
}

.service-card {
    background: linear-gradient(135deg, rgba(26, 26, 46, 0.8) 0%, rgba(15, 52, 96, 0.8) 100%);
    border-radius: 2rem;
    padding: 3rem 2rem;
    border: 1px solid var(--border-soft);
    backdrop-filter: blur(10px);
    transition: transform 0.3s ease, border-color 0.3s ease, box-shadow 0.3s ease;
    position: relative;
    overflow: hidden;
}

.service-card:hover {
    transform: translateY(-10px);
    border-color: var(--border-strong);
    box-shadow: 0 20px 60px rgba(120, 119, 198, 0.2);
}

.service-icon {
    width: 80px;
    height: 80px;
    background: linear-gradient(135deg, var(--accent-violet), var(--accent-pink));
    border-radius: 1.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    margin: 0 auto 1.5rem;
    color: #fff;
    box-shadow: 0 10px 30px rgba(120, 119, 198, 0.3);
}

.service-title {
    font-size: 1.5rem;
    margin-bottom: 1rem;
    text-align: center;
}

.service-desc {
    color: var(--text-soft);
    text-align: center;
    line-height: 1.6;
    margin: 0 0 1.5rem 0;
}

.service-features {
    list-style: none;
    padding: 0;
    margin: 0;
}

.service-feature {
    color: var(--text-dim);
    font-size: 0.9rem;
    margin-bottom: 0.5rem;
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.service-feature::before {
    content: '\2713';
    color: var(--accent-violet);
    font-weight: bold;
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 2rem;
    width: 100%;
    max-width: 1000px;
}

.stat-card {
    text-align: center;
    padding: 2rem;
    transition: transform 0.2s;
}

.stat-card:hover { transform: scale(1.05); }

.stat-number {
    font-size: 3rem;
    font-weight: 900;
    color: var(--accent-violet);
    margin-bottom: 0.5rem;
}

.stat-label {
    color: var(--text-soft);
    font-size: 1.1rem;
    font-weight: 500;
    margin: 0;
}

.process-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 2rem;
    width: 100%;
    max-width: 1000px;
    margin-top: 2rem;
}

.process-card {
    background: var(--bg-card);
    border-radius: 1.5rem;
    padding: 2.5rem 2rem;
    text-align: center;
    border: 1px solid var(--border-soft);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.process-card:hover {
    transform: translateY(-8px);
    box-shadow: 0 8px 32px rgba(120, 119, 198, 0.18);
}

.process-step {
    color: var(--accent-pink);
    font-size: 2.2rem;
    font-weight: 900;
    margin-bottom: 0.7rem;
}

.process-title {
    font-size: 1.3rem;
    margin-bottom: 0.4rem;
}

.process-desc {
    color: var(--text-soft);
    margin: 0;
}

/* ---------- faq ---------- */

.faq-list {
    width: 100%;
    max-width: 800px;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.faq-item {
    background: var(--bg-card);
    border: 1px solid var(--border-soft);
    border-radius: 1.25rem;
    overflow: hidden;
    transition: border-color 0.3s ease;
}

.faq-item.open { border-color: var(--border-strong); }

.faq-question {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding: 1.4rem 1.75rem;
    background: transparent;
    border: none;
    color: var(--text-bright);
    font: inherit;
    font-weight: 600;
    font-size: 1.1rem;
    text-align: left;
    cursor: pointer;
}

.faq-caret {
    flex-shrink: 0;
    transition: transform 0.3s ease;
}

.faq-item.open .faq-caret { transform: rotate(180deg); }

.faq-answer {
    display: grid;
    grid-template-rows: 0fr;
    opacity: 0;
    transition: grid-template-rows 0.35s ease, opacity 0.35s ease;
}

.faq-item.open .faq-answer {
    grid-template-rows: 1fr;
    opacity: 1;
}

.faq-answer-inner {
    overflow: hidden;
    padding: 0 1.75rem;
    color: var(--text-soft);
    line-height: 1.6;
}

.faq-item.open .faq-answer-inner { padding-bottom: 1.4rem; }

.faq-answer-inner p { margin: 0 0 0.75rem 0; }

.faq-details {
    margin: 0;
    padding-left: 1.25rem;
    color: var(--text-dim);
}

.faq-more {
    margin-top: 2rem;
    background: transparent;
    color: var(--accent-violet);
    border: 1px solid var(--border-strong);
    border-radius: 2rem;
    padding: 0.8rem 2rem;
    font: inherit;
    font-weight: 600;
    cursor: pointer;
}

.faq-more:hover { color: var(--accent-pink); border-color: var(--accent-pink); }

/* ---------- contact ---------- */

.contact-text {
    max-width: 44rem;
    text-align: center;
    color: var(--text-soft);
    font-size: 1.2rem;
    margin: 0;
}

.contact-actions {
    display: flex;
    gap: 1.5rem;
    flex-wrap: wrap;
    justify-content: center;
    margin-top: 2.5rem;
}

.btn-outline {
    padding: 1.2rem 2.5rem;
    border-radius: 3rem;
    border: 1px solid var(--border-strong);
    color: var(--text-bright);
    font-weight: 700;
    text-decoration: none;
    transition: transform 0.2s, border-color 0.2s;
}

.btn-outline:hover { transform: translateY(-2px); border-color: var(--accent-pink); }

.contact-links {
    display: flex;
    gap: 2rem;
    justify-content: center;
    align-items: center;
    margin-top: 2.5rem;
    flex-wrap: wrap;
}

.contact-link {
    display: flex;
    align-items: center;
    gap: 0.7rem;
    font-size: 1.13rem;
    font-weight: 500;
    color: var(--bg-deep);
    background: var(--text-soft);
    border-radius: 2rem;
    padding: 0.7rem 1.3rem;
    text-decoration: none;
    transition: background 0.2s, transform 0.2s;
}

.contact-link:hover { background: var(--accent-pink); transform: translateY(-2px) scale(1.04); }

/* ---------- footer ---------- */

.cta-footer {
    background: linear-gradient(90deg, var(--accent-violet) 0%, var(--accent-pink) 100%);
    color: #fff;
    padding: 3.5rem 1rem 2.5rem 1rem;
    text-align: center;
    border-radius: 2rem 2rem 0 0;
    margin-top: 4rem;
}

.cta-headline {
    font-size: 2.3rem;
    font-weight: 900;
    margin-bottom: 1rem;
}

.cta-subtext {
    font-size: 1.25rem;
    font-weight: 500;
    margin: 0 0 2rem 0;
}

.cta-button {
    display: inline-block;
    padding: 1rem 2.5rem;
    background: var(--bg-deep);
    color: #fff;
    font-family: var(--font-display);
    font-weight: 700;
    border-radius: 2rem;
    text-decoration: none;
    transition: transform 0.2s;
}

.cta-button:hover { transform: translateY(-2px) scale(1.04); }

.site-footer {
    padding: 2rem 0 1.5rem 0;
    text-align: center;
    color: #9ca3af;
    background: var(--bg-deep);
}

/* ---------- reveal on scroll ---------- */

.js .reveal {
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 0.7s ease, transform 0.7s ease;
    transition-delay: var(--reveal-delay, 0s);
}

.js .reveal.is-visible {
    opacity: 1;
    transform: none;
}

@media (prefers-reduced-motion: reduce) {
    .js .reveal { opacity: 1; transform: none; transition: none; }
    .hero-icon, .hero-bg, .about-icon-large { animation: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_survives_text_escaping() {
        assert!(!SITE_CSS.contains('&'));
        assert!(!SITE_CSS.contains('<'));
        assert!(!SITE_CSS.contains('>'));
    }

    #[test]
    fn reveal_only_hides_when_scripted() {
        assert!(SITE_CSS.contains(".js .reveal {"));
        assert!(SITE_CSS.contains(".reveal.is-visible"));
    }
}
