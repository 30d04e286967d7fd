//! SVG icon components.
//!
//! Inline SVG so the page needs no icon font. Paths are drawn on a
//! 256x256 grid, Phosphor style (Regular weight).

use leptos::prelude::*;

use crate::types::ServiceIcon;

/// Renders an inline SVG icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "20")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_BRAIN size="64" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

impl ServiceIcon {
    /// Path data for this service icon.
    pub fn path(self) -> &'static str {
        match self {
            ServiceIcon::GraduationCap => ICON_GRADUATION_CAP,
            ServiceIcon::Handshake => ICON_HANDSHAKE,
            ServiceIcon::Code => ICON_CODE,
            ServiceIcon::Lightbulb => ICON_LIGHTBULB,
            ServiceIcon::Robot => ICON_ROBOT,
        }
    }
}

// =============================================================================
// Decorative (hero / about)
// =============================================================================

pub const ICON_BRAIN: &str = "M96,32a40,40,0,0,0-40,40,40,40,0,0,0-24,72,40,40,0,0,0,64,48V32Zm64,0a40,40,0,0,1,40,40,40,40,0,0,1,24,72,40,40,0,0,1-64,48V32ZM112,48V184a24,24,0,0,1-40-16,8,8,0,0,0-8-8,24,24,0,0,1-8-46.6,8,8,0,0,0,4-12.4A24,24,0,0,1,88,64a8,8,0,0,0,8-8,16,16,0,0,1,16-8Zm32,0a16,16,0,0,1,16,8,8,8,0,0,0,8,8,24,24,0,0,1,28,37,8,8,0,0,0,4,12.4A24,24,0,0,1,192,160a8,8,0,0,0-8,8,24,24,0,0,1-40,16Z";

pub const ICON_ROBOT: &str = "M224,64H186.34A48.11,48.11,0,0,0,144,32.23V24a8,8,0,0,0-16,0v8.23A48.11,48.11,0,0,0,85.66,64H48A16,16,0,0,0,32,80v40a16,16,0,0,0,16,16h7.53A56.06,56.06,0,0,0,48,160a56,56,0,0,0,112,0,56.06,56.06,0,0,0-7.53-24H208a16,16,0,0,0,16-16V80A16,16,0,0,0,224,64ZM48,120V80H81.43A48.16,48.16,0,0,0,80,88v32Zm56,88a40,40,0,1,1,40-40A40,40,0,0,1,104,208Zm64-88H128V88a48,48,0,0,0-1.43-8h82.86A48.16,48.16,0,0,0,208,120Zm40-16H178.09a56.25,56.25,0,0,0,3.91-16h26v32ZM84,160a12,12,0,1,1,12,12A12,12,0,0,1,84,160Zm56,0a12,12,0,1,1,12,12A12,12,0,0,1,140,160Z";

pub const ICON_MICROCHIP: &str = "M152,96H104a8,8,0,0,0-8,8v48a8,8,0,0,0,8,8h48a8,8,0,0,0,8-8V104A8,8,0,0,0,152,96Zm-8,48H112V112h32Zm88,0H216V112h16a8,8,0,0,0,0-16H216V56a16,16,0,0,0-16-16H160V24a8,8,0,0,0-16,0V40H112V24a8,8,0,0,0-16,0V40H56A16,16,0,0,0,40,56V96H24a8,8,0,0,0,0,16H40v32H24a8,8,0,0,0,0,16H40v40a16,16,0,0,0,16,16H96v16a8,8,0,0,0,16,0V216h32v16a8,8,0,0,0,16,0V216h40a16,16,0,0,0,16-16V160h16a8,8,0,0,0,0-16Zm-32,56H56V56H200V200Z";

pub const ICON_NETWORK: &str = "M208,152a32.06,32.06,0,0,0-25.87,13.26l-52.3-29.06a32,32,0,0,0,0-16.4l52.3-29.06A32.06,32.06,0,0,0,208,104a32,32,0,1,0-31.71-28.29L124,104.78a32,32,0,1,0,0,46.44l52.3,29.06A32,32,0,1,0,208,152ZM208,56a16,16,0,1,1-16,16A16,16,0,0,1,208,56ZM80,128a16,16,0,1,1,16,16A16,16,0,0,1,80,128Zm128,88a16,16,0,1,1,16-16A16,16,0,0,1,208,216Z";

pub const ICON_LIGHTBULB: &str = "M176,232a8,8,0,0,1-8,8H88a8,8,0,0,1,0-16h80A8,8,0,0,1,176,232Zm40-128a87.55,87.55,0,0,1-33.64,69.21A16.24,16.24,0,0,0,176,186v6a16,16,0,0,1-16,16H96a16,16,0,0,1-16-16v-6a16,16,0,0,0-6.23-12.66A87.59,87.59,0,0,1,40,104.49C39.74,56.83,78.26,17.14,125.88,16A88,88,0,0,1,216,104Zm-16,0a72,72,0,0,0-73.74-72c-39,.92-70.47,33.39-70.26,72.39a71.65,71.65,0,0,0,27.64,56.3A32,32,0,0,1,96,186v6h64v-6a32.15,32.15,0,0,1,12.47-25.35A71.65,71.65,0,0,0,200,104Z";

// =============================================================================
// Services
// =============================================================================

pub const ICON_GRADUATION_CAP: &str = "M251.76,88.94l-120-64a8,8,0,0,0-7.52,0l-120,64a8,8,0,0,0,0,14.12L32,117.87v48.42a15.91,15.91,0,0,0,4.06,10.65C49.16,191.53,78.51,216,128,216a130,130,0,0,0,48-8.76V240a8,8,0,0,0,16,0V199.51a115.63,115.63,0,0,0,27.94-22.57A15.91,15.91,0,0,0,224,166.29V117.87l27.76-14.81a8,8,0,0,0,0-14.12ZM128,200c-43.27,0-68.72-21.14-80-33.71V126.4l76.24,40.66a8,8,0,0,0,7.52,0L176,143.47v46.34C163.4,195.69,147.52,200,128,200Zm80-33.75a97.83,97.83,0,0,1-16,14.25V134.93l16-8.53ZM188,118.94l-.22-.13-56-29.87a8,8,0,0,0-7.52,14.12L171,128l-43,22.93L25,96,128,41.07,231,96Z";

pub const ICON_HANDSHAKE: &str = "M24,120,72,72l40,24,32-16,40,24,48,48-48,48H96Zm48-24L48,120l56,56h80l24-24-40-40-32,16ZM120,136a8,8,0,0,1,11.31,0l24,24A8,8,0,0,1,144,171.31l-24-24A8,8,0,0,1,120,136Z";

pub const ICON_CODE: &str = "M69.12,94.15,28.5,128l40.62,33.85a8,8,0,1,1-10.24,12.29l-48-40a8,8,0,0,1,0-12.29l48-40a8,8,0,0,1,10.24,12.3Zm176,27.7-48-40a8,8,0,1,0-10.24,12.3L227.5,128l-40.62,33.85a8,8,0,1,0,10.24,12.29l48-40a8,8,0,0,0,0-12.29ZM162.73,32.48a8,8,0,0,0-10.25,4.79l-64,176a8,8,0,0,0,4.79,10.26A8.14,8.14,0,0,0,96,224a8,8,0,0,0,7.52-5.27l64-176A8,8,0,0,0,162.73,32.48Z";

// =============================================================================
// UI
// =============================================================================

pub const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";

pub const ICON_CARET_DOWN: &str = "M213.66,101.66l-80,80a8,8,0,0,1-11.32,0l-80-80A8,8,0,0,1,53.66,90.34L128,164.69l74.34-74.35a8,8,0,0,1,11.32,11.32Z";

pub const ICON_LIST: &str = "M224,128a8,8,0,0,1-8,8H40a8,8,0,0,1,0-16H216A8,8,0,0,1,224,128ZM40,72H216a8,8,0,0,0,0-16H40a8,8,0,0,0,0,16ZM216,184H40a8,8,0,0,0,0,16H216a8,8,0,0,0,0-16Z";

pub const ICON_X: &str = "M205.66,194.34a8,8,0,0,1-11.32,11.32L128,139.31,61.66,205.66a8,8,0,0,1-11.32-11.32L116.69,128,50.34,61.66A8,8,0,0,1,61.66,50.34L128,116.69l66.34-66.35a8,8,0,0,1,11.32,11.32L139.31,128Z";

pub const ICON_ENVELOPE: &str = "M224,48H32a8,8,0,0,0-8,8V192a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V56A8,8,0,0,0,224,48Zm-96,85.15L52.57,64H203.43ZM98.71,128,40,181.81V74.19Zm11.84,10.85,12,11.05a8,8,0,0,0,10.82,0l12-11.05,58,53.15H52.57ZM157.29,128,216,74.18V181.82Z";

pub const ICON_LINKEDIN: &str = "M216,24H40A16,16,0,0,0,24,40V216a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V40A16,16,0,0,0,216,24ZM96,176a8,8,0,0,1-16,0V112a8,8,0,0,1,16,0ZM88,96a12,12,0,1,1,12-12A12,12,0,0,1,88,96Zm96,80a8,8,0,0,1-16,0V140a20,20,0,0,0-40,0v36a8,8,0,0,1-16,0V112a8,8,0,0,1,15.79-1.78A36,36,0,0,1,184,140Z";
