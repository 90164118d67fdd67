use crate::constants::STYLE_ELEMENT_ID;
use web_sys as web;

/// Keyframes and media rules the behavior layer depends on.
pub const INJECTED_CSS: &str = r#"
@keyframes slideInRight {
    from { opacity: 0; transform: translateX(100%); }
    to { opacity: 1; transform: translateX(0); }
}

@keyframes slideOutRight {
    from { opacity: 1; transform: translateX(0); }
    to { opacity: 0; transform: translateX(100%); }
}

@media (max-width: 768px) {
    .nav-links { display: none; }
}

@media (min-width: 769px) {
    .nav-links { display: flex !important; }
}

@media (max-width: 480px) {
    .hero h1 { font-size: 2rem; }
    .hero p { font-size: 1rem; }
    .section { padding: 2rem 1rem; }
    .section h2 { font-size: 2rem; }
    .card { padding: 1.5rem; }
    .form-container { padding: 1.5rem; }
}

.nav-links a:focus,
.theme-toggle:focus,
.lang-toggle:focus,
input:focus,
textarea:focus,
select:focus,
.submit-button:focus,
.cta-button:focus {
    outline: 2px solid var(--primary-color);
    outline-offset: 2px;
}

@media (prefers-contrast: high) {
    :root { --border-color: #000000; }
    [data-theme="dark"] { --border-color: #ffffff; }
}

@media (prefers-reduced-motion: reduce) {
    * {
        animation-duration: 0.01ms !important;
        animation-iteration-count: 1 !important;
        transition-duration: 0.01ms !important;
    }
    #background-canvas { display: none; }
}

@media print {
    header, footer, .theme-toggle, .lang-toggle, .mobile-menu, #background-canvas {
        display: none !important;
    }
    main { margin-top: 0 !important; }
    .page { display: block !important; }
    .section { break-inside: avoid; }
}
"#;

/// Append the stylesheet to `<head>` once.
pub fn inject(document: &web::Document) {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        log::warn!("[styles] no <head>");
        return;
    };
    match document.create_element("style") {
        Ok(style) => {
            style.set_id(STYLE_ELEMENT_ID);
            style.set_text_content(Some(INJECTED_CSS));
            if let Err(e) = head.append_child(&style) {
                log::warn!("[styles] append failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("[styles] {:?}", e),
    }
}
