use crate::constants::{ORB_CLASS, ORB_FADE_SEC};
use crate::style;
use portal_core::{OrbField, OrbSample};
use wasm_bindgen::JsCast;
use web_sys as web;

/// One `div` per orb, appended to `<body>` and kept in step with the field.
pub struct OrbScene {
    document: web::Document,
    elements: Vec<web::HtmlElement>,
}

impl OrbScene {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            elements: Vec::new(),
        }
    }

    /// Match the element count to the field, then write this tick's samples.
    pub fn sync(&mut self, field: &OrbField) {
        while self.elements.len() > field.len() {
            if let Some(el) = self.elements.pop() {
                el.remove();
            }
        }
        for sample in field.samples().skip(self.elements.len()) {
            match self.create_element(&sample) {
                Some(el) => self.elements.push(el),
                None => {
                    log::warn!("[scene] could not create orb element");
                    break;
                }
            }
        }
        for (el, sample) in self.elements.iter().zip(field.samples()) {
            apply_sample(el, &sample);
        }
    }

    fn create_element(&self, sample: &OrbSample) -> Option<web::HtmlElement> {
        let body = self.document.body()?;
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_class_name(ORB_CLASS);
        el.style()
            .set_css_text(&style::orb_base_css(sample.color, sample.size, ORB_FADE_SEC));
        body.append_child(&el).ok()?;
        Some(el)
    }
}

fn apply_sample(el: &web::HtmlElement, sample: &OrbSample) {
    let css = el.style();
    _ = css.set_property("opacity", &style::orb_opacity(sample));
    _ = css.set_property("transform", &style::orb_transform(sample));
}
