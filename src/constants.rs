// DOM hooks the behavior layer attaches to. The markup owns these; keep the
// names in sync with index.html.

// Background
pub const CANVAS_ID: &str = "background-canvas";

// Navigation
pub const PAGE_SELECTOR: &str = ".page";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_LINKS_PANEL_SELECTOR: &str = ".nav-links";
pub const NAV_TARGET_ATTR: &str = "data-page"; // section id a nav link activates
pub const ACTIVE_CLASS: &str = "active";

// Mobile menu
pub const MOBILE_MENU_SELECTOR: &str = ".mobile-menu";
pub const MOBILE_MENU_BAR_SELECTOR: &str = "span";

// Preference toggles
pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const LANG_TOGGLE_SELECTOR: &str = ".lang-toggle";
pub const THEME_ATTR: &str = "data-theme";
pub const LOCALIZED_SELECTOR: &str = "[data-en]";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".submit-button";
pub const BUTTON_TEXT_SELECTOR: &str = ".button-text";
pub const LOADING_SELECTOR: &str = ".loading";

// Reveal-on-scroll
pub const CARD_SELECTOR: &str = ".card";

// In-page anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Media queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Id of the injected <style> element
pub const STYLE_ELEMENT_ID: &str = "landing-web-styles";
