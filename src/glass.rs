use crate::dom;
use portal_core::GLASS_RULES;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const GLASS_STYLESHEET: &str = r#"
.glass-container {
    background: rgba(26, 26, 26, 0.1) !important;
    backdrop-filter: blur(20px) !important;
    -webkit-backdrop-filter: blur(20px) !important;
    border: 1px solid rgba(255, 255, 255, 0.1) !important;
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3), 0 0 20px rgba(239, 68, 68, 0.1),
        inset 0 1px 0 rgba(255, 255, 255, 0.1) !important;
}
.glass-navbar {
    background: rgba(26, 26, 26, 0.8) !important;
    backdrop-filter: blur(25px) !important;
    -webkit-backdrop-filter: blur(25px) !important;
    border: 1px solid rgba(255, 255, 255, 0.1) !important;
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3), 0 0 15px rgba(59, 130, 246, 0.1),
        inset 0 1px 0 rgba(255, 255, 255, 0.1) !important;
}
.glass-button {
    background: rgba(239, 68, 68, 0.2) !important;
    backdrop-filter: blur(10px) !important;
    -webkit-backdrop-filter: blur(10px) !important;
    border: 1px solid rgba(239, 68, 68, 0.3) !important;
    box-shadow: 0 4px 15px rgba(0, 0, 0, 0.2), 0 0 10px rgba(239, 68, 68, 0.2) !important;
}
.glass-button:hover {
    background: rgba(239, 68, 68, 0.3) !important;
    border: 1px solid rgba(239, 68, 68, 0.5) !important;
}
.glass-input {
    background: rgba(42, 42, 42, 0.3) !important;
    backdrop-filter: blur(10px) !important;
    -webkit-backdrop-filter: blur(10px) !important;
    border: 1px solid rgba(255, 255, 255, 0.1) !important;
}
.glass-input:focus {
    border: 1px solid rgba(239, 68, 68, 0.5) !important;
}
"#;

pub fn apply_all(document: &web::Document) {
    for (selector, class) in GLASS_RULES {
        dom::add_class_all(document, selector, class.class_name());
    }
}

/// Inject the glass stylesheet, theme the current page, and re-theme
/// whenever nodes are added (popups, admin rows, etc.).
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    dom::inject_style(document, GLASS_STYLESHEET)?;
    apply_all(document);

    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let doc = document.clone();
    // Adding classes touches attributes only, so this never retriggers itself.
    let on_mutation = Closure::wrap(Box::new(
        move |_records: js_sys::Array, _observer: web::MutationObserver| {
            apply_all(&doc);
        },
    ) as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);
    let observer = web::MutationObserver::new(on_mutation.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let options = web::MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer
        .observe_with_options(&body, &options)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    on_mutation.forget();
    Ok(())
}
